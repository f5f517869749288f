use super::{fields::Fields, with_kind};
use crate::config::Kind;
use anyhow::Context;
use std::io::Write;
use tickid::{Base32Ext, Id};

/// Decodes the text form and prints the fields.
pub fn decode(out: &mut impl Write, kind: Kind, text: &str, json: bool) -> anyhow::Result<()> {
    let fields = with_kind!(kind, ID => {
        let id = ID::decode(text).with_context(|| format!("cannot decode {text:?} as {kind:?}"))?;
        Fields::of(&id)
    });
    fields.write(out, json)
}

/// Wraps raw bytes and prints the text form and fields.
pub fn inspect(out: &mut impl Write, kind: Kind, bytes: &[u8], json: bool) -> anyhow::Result<()> {
    let fields = with_kind!(kind, ID => {
        let id = ID::from_slice(bytes).with_context(|| format!("cannot build {kind:?} from bytes"))?;
        Fields::of(&id)
    });
    fields.write(out, json)
}
