use crate::define_id;

define_id!(
    /// An 8-byte ID: 4-byte second timestamp and 4 random bytes.
    ///
    /// 13 symbols of text. The smallest layout, for low-rate use where a
    /// short string matters more than collision headroom.
    ///
    /// ```text
    ///  Byte:   0          3 4          7
    ///          +-----------+-----------+
    ///  Field:  | secs (4)  | random (4)|
    ///          +-----------+-----------+
    /// ```
    ShortId,
    bytes: 8,
    time: 4 => Seconds,
    tag: 0,
    entropy: 4 => Random
);

define_id!(
    /// A 10-byte ID: 4-byte second timestamp and 6 random bytes.
    ///
    /// 16 symbols of text, no padding bits.
    ///
    /// ```text
    ///  Byte:   0          3 4                9
    ///          +-----------+-----------------+
    ///  Field:  | secs (4)  |   random (6)    |
    ///          +-----------+-----------------+
    /// ```
    TickId,
    bytes: 10,
    time: 4 => Seconds,
    tag: 0,
    entropy: 6 => Random
);

define_id!(
    /// A 10-byte strictly monotonic ID: 6-byte millisecond timestamp and a
    /// 4-byte counter.
    ///
    /// IDs from one generator compare strictly increasing, in bytes and in
    /// [`Layout::combined`](crate::Layout::combined).
    ///
    /// ```text
    ///  Byte:   0               5 6          9
    ///          +----------------+-----------+
    ///  Field:  |   millis (6)   | count (4) |
    ///          +----------------+-----------+
    /// ```
    MonoId,
    bytes: 10,
    time: 6 => Millis,
    tag: 0,
    entropy: 4 => Sequence
);

define_id!(
    /// A 12-byte ID for multi-process deployments: 4-byte second timestamp,
    /// 4-byte process tag and a 4-byte counter.
    ///
    /// The tag defaults to [`ProcessTag::current`](crate::ProcessTag::current).
    ///
    /// ```text
    ///  Byte:   0          3 4          7 8          11
    ///          +-----------+-----------+------------+
    ///  Field:  | secs (4)  |  tag (4)  | count (4)  |
    ///          +-----------+-----------+------------+
    /// ```
    TaggedId,
    bytes: 12,
    time: 4 => Seconds,
    tag: 4,
    entropy: 4 => Sequence
);
