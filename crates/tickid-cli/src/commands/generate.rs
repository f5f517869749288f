use super::with_kind;
use crate::config::Kind;
use std::io::Write;
use tickid::Base32Ext;

/// Prints `count` fresh identifiers, one per line, or as a JSON array.
pub fn generate(out: &mut impl Write, kind: Kind, count: usize, json: bool) -> anyhow::Result<()> {
    with_kind!(kind, ID => {
        let generator = ID::default_generator();
        if json {
            let ids: Vec<ID> = (0..count).map(|_| generator.next_id()).collect();
            serde_json::to_writer(&mut *out, &ids)?;
            writeln!(out)?;
        } else {
            let mut buf = ID::buf();
            for _ in 0..count {
                writeln!(out, "{}", generator.next_id().encode_to_buf(&mut buf))?;
            }
        }
    });
    tracing::debug!(?kind, count, "generated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickid::{Layout, MonoId};

    #[test]
    fn prints_one_id_per_line() {
        let mut out = Vec::new();
        generate(&mut out, Kind::Mono, 3, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        let ids: Vec<MonoId> = text.lines().map(|l| l.parse().unwrap()).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.windows(2).all(|w| w[0].combined() < w[1].combined()));
    }

    #[test]
    fn json_is_an_array_of_text_ids() {
        let mut out = Vec::new();
        generate(&mut out, Kind::Short, 2, true).unwrap();
        let ids: Vec<String> = serde_json::from_slice(&out).unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.iter().all(|id| id.len() == 13));
    }
}
