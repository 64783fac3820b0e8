//! Reads lines from stdin until a blank one, then prints them back out in
//! descending order.

use std::io;
use std::io::Write;

use bytespool::read_line;

fn main() -> io::Result<()> {
  let stdin = io::stdin();
  let mut input = stdin.lock();

  let mut lines = Vec::new();
  loop {
    let line = read_line(&mut input)?;
    if line.is_empty() {
      break;
    }

    lines.push(line);
  }

  lines.sort_unstable_by(|a, b| b.cmp(a));

  let stdout = io::stdout();
  let mut output = stdout.lock();
  for line in &lines {
    output.write_all(line)?;
    output.write_all(b"\n")?;
  }

  Ok(())
}
