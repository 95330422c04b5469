//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::thread::JoinHandle;
use tempfile::TempDir;

/// A scratch working directory holding changelog and release-notes files
pub struct TestWorkspace {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestWorkspace {
  /// Create an empty workspace
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Write a file relative to the workspace root
  pub fn write_file(&self, name: &str, content: &str) -> Result<()> {
    std::fs::write(self.path.join(name), content)?;
    Ok(())
  }

  /// Read a file relative to the workspace root
  pub fn read_file(&self, name: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(name))?)
  }

  /// Check if a file exists
  pub fn file_exists(&self, name: &str) -> bool {
    self.path.join(name).exists()
  }
}

/// Run the relnotes binary in the workspace, expecting success
pub fn run_relnotes(ws: &TestWorkspace, args: &[&str]) -> Result<Output> {
  let output = run_relnotes_raw(ws, args)?;

  if !output.status.success() {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!(
      "relnotes {} failed\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run the relnotes binary without asserting on the exit status
pub fn run_relnotes_raw(ws: &TestWorkspace, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_relnotes");

  Command::new(bin)
    .current_dir(&ws.path)
    .env_remove("RELNOTES_SOURCE")
    .env_remove("RELNOTES_WEBHOOK")
    .args(args)
    .output()
    .context("Failed to run relnotes")
}

/// One-shot webhook sink: accepts a single HTTP request, answers 200, and
/// hands back the raw request text
pub struct WebhookSink {
  pub url: String,
  handle: JoinHandle<Result<String>>,
}

impl WebhookSink {
  /// Bind a loopback port and start waiting for one request
  pub fn start() -> Result<Self> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;

    let handle = std::thread::spawn(move || -> Result<String> {
      let (mut stream, _) = listener.accept()?;
      let mut raw = Vec::new();
      let mut buf = [0u8; 8192];

      loop {
        let n = stream.read(&mut buf)?;
        if n == 0 {
          anyhow::bail!("connection closed before a full request arrived");
        }
        raw.extend_from_slice(&buf[..n]);

        if let Some(text) = request_complete(&raw) {
          stream.write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")?;
          stream.flush()?;
          return Ok(text);
        }
      }
    });

    Ok(Self {
      url: format!("http://{}", addr),
      handle,
    })
  }

  /// Wait for the request and return its raw text (request line, headers, body)
  pub fn recv(self) -> Result<String> {
    self
      .handle
      .join()
      .map_err(|_| anyhow::anyhow!("webhook sink thread panicked"))?
  }
}

/// The request is complete once the headers and the declared body length
/// have arrived
fn request_complete(raw: &[u8]) -> Option<String> {
  let text = String::from_utf8_lossy(raw).to_string();
  let header_end = text.find("\r\n\r\n")?;

  let content_length = text[..header_end]
    .lines()
    .find_map(|line| {
      let (name, value) = line.split_once(':')?;
      if name.eq_ignore_ascii_case("content-length") {
        value.trim().parse::<usize>().ok()
      } else {
        None
      }
    })
    .unwrap_or(0);

  let body_len = raw.len() - (header_end + 4);
  (body_len >= content_length).then_some(text)
}
