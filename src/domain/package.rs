//! Package naming and byte-formatting helpers.
//!
//! Pure functions only - no I/O, no async, no filesystem access.

// ── Constants ────────────────────────────────────────────────────────────────

/// The one archive suffix the installer recognizes.
pub const ARCHIVE_SUFFIX: &str = ".tar.gz";

/// Name of the agent executable inside the unpacked package's `bin/`.
pub const AGENT_EXECUTABLE: &str = "huker";

/// Log file the launched agent writes under the installation directory.
pub const SUPERVISOR_LOG: &str = "supervisor.log";

/// State database the launched agent creates under the installation directory.
pub const SUPERVISOR_DB: &str = "supervisor.db";

// ── Naming ───────────────────────────────────────────────────────────────────

/// Derive the directory name a package archive unpacks to.
///
/// `huker-1.0.0.tar.gz` unpacks to `huker-1.0.0`. A name that does not end
/// in `.tar.gz` passes through unchanged - a known quirk kept for
/// compatibility: such an archive would fail the unpack step anyway, so the
/// asymmetry is only observable in the derived launch path.
#[must_use]
pub fn extracted_dir_name(package_name: &str) -> &str {
    package_name
        .strip_suffix(ARCHIVE_SUFFIX)
        .unwrap_or(package_name)
}

/// Encode bytes as lowercase hex.
#[must_use]
pub fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(char::from(HEX[(b >> 4) as usize]));
        out.push(char::from(HEX[(b & 0xf) as usize]));
    }
    out
}
