//! Text extraction via the `pdftotext` subprocess.
//!
//! `-layout` is load-bearing: the line patterns rely on column alignment
//! surviving extraction.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

/// Run `pdftotext -layout - -`, feeding the PDF on stdin and returning the
/// extracted text. Any failure of the subprocess is fatal.
pub fn pdf_to_text(pdf: &[u8]) -> Result<String> {
    let mut child = Command::new("pdftotext")
        .args(["-layout", "-", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .context("spawning pdftotext (is poppler-utils installed?)")?;

    let mut stdin = child.stdin.take().context("no stdin handle on pdftotext")?;
    stdin.write_all(pdf).context("writing PDF to pdftotext")?;
    drop(stdin); // close stdin so pdftotext sees EOF

    let output = child
        .wait_with_output()
        .context("reading pdftotext output")?;
    if !output.status.success() {
        bail!("pdftotext exited with {}", output.status);
    }

    String::from_utf8(output.stdout).context("pdftotext produced non-UTF-8 output")
}
