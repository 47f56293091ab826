//! Shared test utilities and fixtures.

#![allow(dead_code)]

use chrono::NaiveDate;
use garden::LoadOptions;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Re-export canonical test utilities from garden::testing
pub use garden::testing::{date, item, linked_item, private_record, record};

/// Fixed "today" so undated writings are deterministic.
pub fn options() -> LoadOptions {
    LoadOptions {
        words_per_minute: 200,
        today: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
    }
}

/// A content directory on disk that goes away with the value.
pub struct Garden {
    dir: TempDir,
}

impl Garden {
    pub fn new() -> Self {
        Garden {
            dir: tempfile::tempdir().expect("create temp content dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `file_name` with the raw contents given.
    pub fn raw(&self, file_name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(file_name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    /// Write `<stem>.mdx` with a YAML header built from `header` lines.
    pub fn writing(&self, stem: &str, header: &[&str], body: &str) -> PathBuf {
        let contents = format!("---\n{}\n---\n{}", header.join("\n"), body);
        self.raw(&format!("{}.mdx", stem), &contents)
    }
}

/// The small garden most scenario tests use.
///
/// | slug      | date       | tags            | backlinks | public |
/// |-----------|------------|-----------------|-----------|--------|
/// | compost   | 2024-03-01 | soil, garden    | mulch     | yes    |
/// | mulch     | 2024-02-01 | soil            | compost   | yes    |
/// | rust-tips | 2024-01-10 | rust            |           | yes    |
/// | drafts    | 2024-04-01 | soil            |           | no     |
pub fn sample_garden() -> Garden {
    let garden = Garden::new();
    garden.writing(
        "compost",
        &[
            "title: Composting at Home",
            "date: 2024-03-01",
            "tendedDate: 2024-05-20",
            "status: evergreen",
            "excerpt: Turning scraps into soil",
            "tags: [soil, garden]",
            "backlinks: [mulch]",
        ],
        "# Why compost\n\nKitchen scraps rot.\n\n## Browns and greens\n\nBalance them.\n",
    );
    garden.writing(
        "mulch",
        &[
            "title: Mulch Matters",
            "date: 2024-02-01",
            "status: budding",
            "excerpt: Cover the beds",
            "tags: [soil]",
            "backlinks: [compost]",
        ],
        "Mulch keeps moisture in.\n",
    );
    garden.raw(
        "rust-tips.md",
        "---\ntitle: Rust Tips\ndate: 2024-01-10\nexcerpt: Borrow checker notes\ntags: [rust]\n---\nOwnership first.\n",
    );
    garden.writing(
        "drafts",
        &[
            "title: Soil Drafts",
            "date: 2024-04-01",
            "tags: [soil]",
            "isPublic: false",
        ],
        "Not ready.\n",
    );
    garden
}
