use serde::Serialize;
use std::io::Write;
use tickid::{Base32Ext, Layout};

/// The decoded view of one identifier, as printed by `decode` and `inspect`.
#[derive(Debug, Serialize)]
pub struct Fields {
    pub text: String,
    pub hex: String,
    pub time: u64,
    pub unix_millis: u64,
    pub tag: String,
    pub entropy: u64,
    pub nil: bool,
}

impl Fields {
    /// Reads every field of `id`.
    pub fn of<ID: Layout>(id: &ID) -> Self {
        Self {
            text: id.encode().as_str().to_owned(),
            hex: hex::encode(id.as_bytes()),
            time: id.time(),
            unix_millis: id.unix_millis(),
            tag: hex::encode(id.tag()),
            entropy: id.entropy(),
            nil: id.is_nil(),
        }
    }

    /// Prints the fields as aligned `key: value` lines, or as pretty JSON.
    pub fn write(&self, out: &mut impl Write, json: bool) -> anyhow::Result<()> {
        if json {
            serde_json::to_writer_pretty(&mut *out, self)?;
            writeln!(out)?;
            return Ok(());
        }
        writeln!(out, "text:        {}", self.text)?;
        writeln!(out, "hex:         {}", self.hex)?;
        writeln!(out, "time:        {}", self.time)?;
        writeln!(out, "unix_millis: {}", self.unix_millis)?;
        if !self.tag.is_empty() {
            writeln!(out, "tag:         {}", self.tag)?;
        }
        writeln!(out, "entropy:     {}", self.entropy)?;
        if self.nil {
            writeln!(out, "nil:         true")?;
        }
        Ok(())
    }
}
