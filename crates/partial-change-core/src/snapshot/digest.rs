//! Digest computation for snapshots.
//!
//! ## Determinism Guarantees
//!
//! - Same structure → same digest (serde_json maps iterate in sorted key order)
//! - Any value difference → different digest
//! - The hashed text is exactly the compact JSON form, streamed into the
//!   hasher from an explicit work stack instead of rendered recursively
//!
//! If another crate in the build enables serde_json's `preserve_order`
//! feature, equal maps built in different insertion orders may digest
//! differently. Digests are only ever used as a positive equality shortcut,
//! so that case falls back to a full comparison.

use serde_json::Value;
use sha2::{Digest, Sha256};

enum Token<'a> {
    Text(&'static str),
    Key(&'a str),
    Value(&'a Value),
}

/// Compute the digest of a structure.
///
/// ## Returns
///
/// Hex-encoded SHA256 digest (64 characters) of the compact JSON form
pub fn compute_structure_digest(structure: &Value) -> String {
    let mut hasher = Sha256::new();
    let mut pending = vec![Token::Value(structure)];

    while let Some(token) = pending.pop() {
        match token {
            Token::Text(text) => hasher.update(text.as_bytes()),
            Token::Key(key) => hasher.update(Value::from(key).to_string().as_bytes()),
            Token::Value(Value::Object(map)) => {
                let mut tokens = vec![Token::Text("{")];
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        tokens.push(Token::Text(","));
                    }
                    tokens.push(Token::Key(key));
                    tokens.push(Token::Text(":"));
                    tokens.push(Token::Value(value));
                }
                tokens.push(Token::Text("}"));
                pending.extend(tokens.into_iter().rev());
            }
            Token::Value(Value::Array(items)) => {
                let mut tokens = vec![Token::Text("[")];
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        tokens.push(Token::Text(","));
                    }
                    tokens.push(Token::Value(item));
                }
                tokens.push(Token::Text("]"));
                pending.extend(tokens.into_iter().rev());
            }
            Token::Value(scalar) => hasher.update(scalar.to_string().as_bytes()),
        }
    }

    hex::encode(hasher.finalize())
}
