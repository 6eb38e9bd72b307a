use std::fmt::Write;

/// Number of random bytes in a workspace name (two hex digits each).
const WORKSPACE_NAME_BYTES: usize = 4;

/// Generate a random lowercase hex token of `2 * N` characters.
pub fn generate_hex_token<const N: usize>() -> String {
    let bytes: [u8; N] = rand::random();
    hex_encode(&bytes)
}

/// Generate a random name for a build workspace, e.g. `3f9a0c1e`.
pub fn generate_workspace_name() -> String {
    generate_hex_token::<WORKSPACE_NAME_BYTES>()
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // Writing into a String cannot fail
        let _ = write!(out, "{b:02x}");
    }
    out
}
