//! Hash domain governance lock.
//!
//! - The domain set is exactly {board fingerprint, policy snapshot, run summary}.
//! - Domain bytes are unique, null-terminated and named `FIFTEEN::*::V1\0`.
//! - Production code never spells a domain literal or calls SHA-256
//!   directly outside the two authority files.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use fifteen_kernel::proof::hash::canonical_hash;
use fifteen_kernel::proof::hash_domain::HashDomain;

#[test]
fn domain_set_is_locked() {
    assert_eq!(
        HashDomain::ALL,
        &[
            HashDomain::BoardFingerprint,
            HashDomain::PolicySnapshot,
            HashDomain::RunSummary,
        ],
        "if you added a domain, update this lock"
    );
}

#[test]
fn domain_bytes_are_unique_and_well_formed() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(seen.insert(bytes), "duplicate domain bytes: {domain}");
        assert!(bytes.starts_with(b"FIFTEEN::"), "{domain} lacks FIFTEEN:: prefix");
        assert!(bytes.ends_with(b"::V1\0"), "{domain} does not end with ::V1\\0");
    }
}

#[test]
fn same_bytes_under_different_domains_hash_differently() {
    let data = [1_u8, 2, 3, 4];
    let digests: BTreeSet<String> = HashDomain::ALL
        .iter()
        .map(|d| canonical_hash(*d, &data).as_str().to_string())
        .collect();
    assert_eq!(digests.len(), HashDomain::ALL.len());
}

#[test]
fn board_fingerprint_is_sha256_over_prefix_and_tiles() {
    use fifteen_kernel::carrier::board::Board;
    use fifteen_search::node::board_fingerprint;
    use sha2::{Digest, Sha256};

    let board = Board::solved();
    let mut hasher = Sha256::new();
    hasher.update(HashDomain::BoardFingerprint.as_bytes());
    hasher.update(board.as_bytes());
    let expected = format!("sha256:{}", hex::encode(hasher.finalize()));

    assert_eq!(board_fingerprint(&board).as_str(), expected);
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let Ok(entries) = std::fs::read_dir(dir) else {
        return out;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            out.extend(rust_files(&path));
        } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
            out.push(path);
        }
    }
    out
}

/// Lines of production code: everything before the first `#[cfg(test)]`,
/// minus comment lines.
fn production_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| !line.trim().starts_with("#[cfg(test)]"))
        .filter(|(_, line)| !line.trim().starts_with("//"))
}

fn violations(pattern: &str, authority_file: &str) -> Vec<String> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let mut found = Vec::new();
    for krate in ["kernel", "search", "harness"] {
        for path in rust_files(&root.join(krate).join("src")) {
            if path.file_name().and_then(|n| n.to_str()) == Some(authority_file) {
                continue;
            }
            let content = std::fs::read_to_string(&path).unwrap();
            for (i, line) in production_lines(&content) {
                if line.contains(pattern) {
                    found.push(format!("  {}:{}: {}", path.display(), i + 1, line.trim()));
                }
            }
        }
    }
    found
}

#[test]
fn no_raw_domain_literals_outside_hash_domain_rs() {
    let found = violations("b\"FIFTEEN::", "hash_domain.rs");
    assert!(found.is_empty(), "raw domain literals:\n{}", found.join("\n"));
}

#[test]
fn no_direct_sha256_outside_hash_rs() {
    let found = violations("Sha256", "hash.rs");
    assert!(found.is_empty(), "direct SHA-256 use:\n{}", found.join("\n"));
}

#[test]
fn scanner_sees_the_production_tree() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let files = rust_files(&root.join("search").join("src"));
    assert!(
        files.iter().any(|p| p.ends_with("frontier.rs")),
        "scanner did not find search/src/frontier.rs"
    );
}
