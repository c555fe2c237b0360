//! Progress bar display for the highlighting pass

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for multi-document highlighting
pub struct ProgressDisplay {
    file_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total document count
    pub fn new(total_files: u64) -> Self {
        let file_style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} documents {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let file_pb = ProgressBar::new(total_files);
        file_pb.set_style(file_style);

        Self { file_pb }
    }

    /// Update to show the document being processed
    pub fn update_file(&self, file_path: &str) {
        // Truncate long paths for display
        let display_path = if file_path.len() > 50 {
            format!("...{}", &file_path[file_path.len() - 47..])
        } else {
            file_path.to_string()
        };
        self.file_pb.set_message(display_path);
        self.file_pb.inc(1);
    }

    /// Finish the pass
    pub fn finish(&self) {
        self.file_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.file_pb.abandon();
    }
}
