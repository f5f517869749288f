mod bench;
mod decode;
mod fields;
mod generate;

pub use bench::bench;
pub use decode::{decode, inspect};
pub use generate::generate;

/// Runs `$body` with `$id` bound to the layout type selected by `$kind`.
macro_rules! with_kind {
    ($kind:expr, $id:ident => $body:expr) => {
        match $kind {
            $crate::config::Kind::Short => {
                type $id = ::tickid::ShortId;
                $body
            }
            $crate::config::Kind::Tick => {
                type $id = ::tickid::TickId;
                $body
            }
            $crate::config::Kind::Mono => {
                type $id = ::tickid::MonoId;
                $body
            }
            $crate::config::Kind::Tagged => {
                type $id = ::tickid::TaggedId;
                $body
            }
        }
    };
}
pub(crate) use with_kind;
