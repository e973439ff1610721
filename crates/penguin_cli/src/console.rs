//! Line-oriented terminal front end.

use penguin_core::Ui;
use std::io::{BufRead, Write};

const DIVIDER: &str = "--------------------------------";
const BANNER: &str = r"
      .--.
     |o_o |   PENGUIN
     |:_/ |   chill. simple. smooth.
    //   \ \
   (|     | )
  /'\_   _/`\
  \___)=(___/
";

/// `Ui` over any buffered reader and writer (stdin/stdout in production).
pub struct ConsoleUi<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    // Terminal write failures cannot be reported anywhere more useful.
    fn write_text(&mut self, text: &str) {
        let _ = writeln!(self.output, "{text}");
        let _ = self.output.flush();
    }
}

impl<R: BufRead, W: Write> Ui for ConsoleUi<R, W> {
    fn show_intro(&mut self) {
        self.write_text(BANNER);
        self.write_text(DIVIDER);
        self.write_text("Let's start!");
        self.write_text(DIVIDER);
    }

    fn show_text(&mut self, text: &str) {
        self.write_text(text);
        self.write_text(DIVIDER);
    }

    fn show_error(&mut self, message: &str) {
        self.write_text(&format!("Error: {message}"));
        self.write_text(DIVIDER);
    }

    // Bytes are decoded lossily so one garbled line stays a bad command
    // instead of ending the session.
    fn read_line(&mut self) -> Option<String> {
        let mut raw = Vec::new();
        match self.input.read_until(b'\n', &mut raw) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let line = String::from_utf8_lossy(&raw);
                Some(line.trim_end_matches(['\r', '\n']).to_string())
            }
        }
    }

    fn show_exit(&mut self) {
        self.write_text("Thanks for using Penguin. Have a chill day!");
    }
}
