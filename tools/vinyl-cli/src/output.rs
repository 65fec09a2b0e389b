//! Output formatting for the CLI.

use console::{pad_str, style, truncate_str, Alignment, Term};
use vinyl_commerce::checkout::CheckoutMode;
use vinyl_commerce::notify::{Notification, NotificationKind, NotificationSink};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stderr(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a step in a process.
    pub fn step(&self, num: usize, total: usize, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style(format!("[{}/{}]", num, total)).dim(), msg);
    }

    /// Print a toast.
    pub fn toast(&self, notification: &Notification) {
        if self.json {
            return;
        }
        match notification.kind {
            NotificationKind::Success => {
                println!("  {} {}", style("♪").green(), notification.message)
            }
            NotificationKind::Error => println!(
                "  {} {}",
                style("!").red().bold(),
                style(&notification.message).red()
            ),
        }
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", format_row(cols, widths));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Whether stdout-facing prompts can be shown.
    pub fn is_interactive(&self) -> bool {
        !self.json && self.term.is_term()
    }
}

impl NotificationSink for Output {
    fn notify(&mut self, notification: Notification) {
        self.toast(&notification);
    }
}

/// Colored badge for the checkout mode.
pub fn mode_badge(mode: CheckoutMode) -> String {
    match mode {
        CheckoutMode::Cart => style(mode.as_str()).cyan().to_string(),
        CheckoutMode::Checkout => style(mode.as_str()).yellow().to_string(),
    }
}

/// Lay out cells at fixed display widths, cutting overlong ones with an ellipsis.
pub fn format_row(cols: &[&str], widths: &[usize]) -> String {
    let cells: Vec<String> = cols
        .iter()
        .zip(widths.iter())
        .map(|(col, width)| {
            let cut = truncate_str(col, *width, "…");
            pad_str(&cut, *width, Alignment::Left, None).into_owned()
        })
        .collect();
    cells.join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row_pads_and_cuts() {
        assert_eq!(format_row(&["3", "Solitude"], &[3, 10]), "3    Solitude  ");
        assert_eq!(format_row(&["Classical Moments"], &[10]), "Classical…");
    }

    #[test]
    fn test_format_row_aligns_by_display_width() {
        let widths = [6, 4];
        for cols in [["Кино", "Рок"], ["東京の夜", "J-pop"], ["Solitude", "Ambient"]] {
            let row = format_row(&cols, &widths);
            assert_eq!(console::measure_text_width(&row), 6 + 2 + 4, "{}", row);
        }
    }

    #[test]
    fn test_json_mode_is_not_interactive() {
        assert!(!Output::new(false, true).is_interactive());
    }
}
