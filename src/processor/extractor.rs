//! Bank extraction from split blocks.

use crate::error::{ReshapeError, Result};
use crate::models::{Bank, BlockRange};
use polars::prelude::DataFrame;
use tracing::debug;

/// Raw rows of both banks, still in the source column schema
#[derive(Debug, Clone)]
pub struct RawBanks {
    pub bank_a: DataFrame,
    pub bank_b: DataFrame,
}

/// Take bank A verbatim from block 0 and bank B from block 1 minus its header row
pub fn extract_banks(frame: &DataFrame, blocks: &[BlockRange]) -> Result<RawBanks> {
    let [block_a, block_b] = blocks else {
        return Err(ReshapeError::malformed(format!(
            "expected 2 blocks (bank A and bank B), found {}",
            blocks.len()
        )));
    };

    if block_b.is_empty() {
        return Err(ReshapeError::malformed(format!(
            "block for bank {} has no rows, so its header row cannot be removed",
            Bank::B
        )));
    }
    if block_b.len() == 1 {
        return Err(ReshapeError::malformed(format!(
            "block for bank {} contains only its header row (row {})",
            Bank::B,
            block_b.start
        )));
    }

    let bank_a = frame.slice(block_a.start as i64, block_a.len());
    let bank_b = frame.slice((block_b.start + 1) as i64, block_b.len() - 1);

    debug!(
        "Extracted bank A ({} rows) and bank B ({} rows)",
        bank_a.height(),
        bank_b.height()
    );

    Ok(RawBanks { bank_a, bank_b })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn raw_frame() -> DataFrame {
        df!(
            "Time" => ["0.0", "0.5", "Time", "0.0", "0.5"],
            "Exp1" => ["a0", "a1", "Exp1", "b0", "b1"]
        )
        .unwrap()
    }

    #[test]
    fn test_header_row_removed_from_bank_b() {
        let frame = raw_frame();
        let blocks = [BlockRange::new(0, 2), BlockRange::new(2, 5)];

        let banks = extract_banks(&frame, &blocks).unwrap();
        assert_eq!(banks.bank_a.height(), 2);
        assert_eq!(banks.bank_b.height(), 2);

        let b_values: Vec<Option<&str>> = banks
            .bank_b
            .column("Exp1")
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(b_values, vec![Some("b0"), Some("b1")]);
    }

    #[test]
    fn test_wrong_block_count_is_malformed() {
        let frame = raw_frame();

        for blocks in [
            vec![BlockRange::new(0, 5)],
            vec![
                BlockRange::new(0, 1),
                BlockRange::new(1, 2),
                BlockRange::new(2, 5),
            ],
        ] {
            match extract_banks(&frame, &blocks) {
                Err(ReshapeError::MalformedInput { reason }) => {
                    assert!(reason.starts_with("expected 2 blocks"));
                    assert!(reason.contains(&format!("found {}", blocks.len())));
                }
                other => panic!("Expected MalformedInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_header_only_bank_b_is_malformed() {
        let frame = raw_frame();
        let blocks = [BlockRange::new(0, 4), BlockRange::new(4, 5)];

        match extract_banks(&frame, &blocks) {
            Err(ReshapeError::MalformedInput { reason }) => {
                assert!(reason.contains("only its header row"));
            }
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_bank_b_block_is_malformed() {
        let frame = raw_frame();
        let blocks = [BlockRange::new(0, 5), BlockRange::new(5, 5)];

        assert!(matches!(
            extract_banks(&frame, &blocks),
            Err(ReshapeError::MalformedInput { .. })
        ));
    }
}
