//! Text serialization of sample blocks in the `ms` layout.

use crate::sampling::Site;
use std::fmt::Write;

/// Render one block of sites.
///
/// ```text
/// //
/// segsites: 2
/// positions: 0.1 0.25
/// 01
/// 10
/// ```
///
/// One haplotype row is written per sampled gamete, in draw order. When the
/// block has no sites only the first two lines are written. The block always
/// ends with an empty line so that consecutive blocks stay separated.
pub fn ms_block(sites: &[Site]) -> String {
    let rows = sites.first().map_or(0, |s| s.states.len());
    let mut out = String::with_capacity(32 + sites.len() * (rows + 12));
    out.push_str("//\n");
    // Writing into a String cannot fail.
    let _ = writeln!(out, "segsites: {}", sites.len());
    if !sites.is_empty() {
        out.push_str("positions:");
        for site in sites {
            let _ = write!(out, " {}", site.position);
        }
        out.push('\n');
        let columns: Vec<&[u8]> = sites.iter().map(|s| s.states.as_bytes()).collect();
        for row in 0..rows {
            out.extend(
                columns
                    .iter()
                    .map(|c| c.get(row).copied().map_or('0', char::from)),
            );
            out.push('\n');
        }
    }
    out.push('\n');
    out
}
