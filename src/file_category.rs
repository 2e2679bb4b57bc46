/// File categorization for extension-based filing.
///
/// Maps a file name to one of the fixed destination categories by testing
/// its name against each category's extension list in declaration order.
/// The first match wins; anything unmatched lands in `Misc`.
///
/// # Examples
///
/// ```
/// use declutter::file_category::Category;
///
/// assert_eq!(Category::classify("photo.jpg"), Category::Media);
/// assert_eq!(Category::classify("script.py"), Category::Programming);
/// assert_eq!(Category::classify("notes.unknownext"), Category::Misc);
/// ```

/// A destination bucket for files sharing a file-type grouping.
///
/// The set is fixed at build time. `DeleteMe` and `LargeFiles` have no
/// extension list of their own: they are reached only through the delete
/// decision and the large-file size override, respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Pictures, audio, video, plain documents.
    Media,
    /// Source files, data files, and other tooling artifacts.
    Programming,
    /// Shortcut and link files.
    Syslinks,
    /// Installers and executables.
    Executables,
    /// Compressed archives.
    ZipFiles,
    /// Anything without an extension match.
    Misc,
    /// Holding area for files the operator chose to delete.
    DeleteMe,
    /// Oversized files, routed by size regardless of extension.
    LargeFiles,
}

impl Category {
    /// All categories in matching/declaration order. First match wins, so
    /// the order of this table is part of the classifier's contract.
    pub const ALL: [Category; 8] = [
        Category::Media,
        Category::Programming,
        Category::Syslinks,
        Category::Executables,
        Category::ZipFiles,
        Category::Misc,
        Category::DeleteMe,
        Category::LargeFiles,
    ];

    /// Returns the directory name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use declutter::file_category::Category;
    ///
    /// assert_eq!(Category::Media.dir_name(), "media");
    /// assert_eq!(Category::ZipFiles.dir_name(), "zip files");
    /// assert_eq!(Category::LargeFiles.dir_name(), "Large_Files");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Media => "media",
            Category::Programming => "programming",
            Category::Syslinks => "syslinks",
            Category::Executables => "executables",
            Category::ZipFiles => "zip files",
            Category::Misc => "misc",
            Category::DeleteMe => "delete_me",
            Category::LargeFiles => "Large_Files",
        }
    }

    /// The extension suffixes claimed by this category, leading dot included.
    /// Matching is case-sensitive.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Category::Media => &[
                ".jpg", ".png", ".gif", ".mp3", ".bit", ".bmp", ".txt", ".pdf", ".leo", ".ogg",
                ".mp4", ".tif", ".psd", ".skba", ".lip",
            ],
            Category::Programming => &[
                ".py", ".ahk", ".json", ".ini", ".csv", ".nb", ".cdf", ".apk", ".jonsl",
            ],
            Category::Syslinks => &[".lnk", ".url"],
            Category::Executables => &[".exe", ".msi"],
            Category::ZipFiles => &[".zip", ".7z", ".tar", ".rar", ".gz"],
            Category::Misc | Category::DeleteMe | Category::LargeFiles => &[],
        }
    }

    /// Classifies a file name into a category.
    ///
    /// Tries each category in `ALL` order and each of its extensions in list
    /// order, returning on the first suffix match. Unmatched names fall into
    /// `Misc`.
    pub fn classify(file_name: &str) -> Category {
        for category in Category::ALL {
            for extension in category.extensions() {
                if file_name.ends_with(extension) {
                    return category;
                }
            }
        }
        Category::Misc
    }

    /// Looks a category up by its directory name.
    pub fn from_dir_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.dir_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_dir_names() {
        assert_eq!(Category::Media.dir_name(), "media");
        assert_eq!(Category::Programming.dir_name(), "programming");
        assert_eq!(Category::Syslinks.dir_name(), "syslinks");
        assert_eq!(Category::Executables.dir_name(), "executables");
        assert_eq!(Category::ZipFiles.dir_name(), "zip files");
        assert_eq!(Category::Misc.dir_name(), "misc");
        assert_eq!(Category::DeleteMe.dir_name(), "delete_me");
        assert_eq!(Category::LargeFiles.dir_name(), "Large_Files");
    }

    #[test]
    fn test_classify_media() {
        assert_eq!(Category::classify("photo.jpg"), Category::Media);
        assert_eq!(Category::classify("song.mp3"), Category::Media);
        assert_eq!(Category::classify("readme.txt"), Category::Media);
        assert_eq!(Category::classify("paper.pdf"), Category::Media);
    }

    #[test]
    fn test_classify_programming() {
        assert_eq!(Category::classify("script.py"), Category::Programming);
        assert_eq!(Category::classify("data.json"), Category::Programming);
        assert_eq!(Category::classify("table.csv"), Category::Programming);
    }

    #[test]
    fn test_classify_archives_and_links() {
        assert_eq!(Category::classify("backup.zip"), Category::ZipFiles);
        assert_eq!(Category::classify("dump.tar"), Category::ZipFiles);
        assert_eq!(Category::classify("setup.exe"), Category::Executables);
        assert_eq!(Category::classify("desktop.lnk"), Category::Syslinks);
    }

    #[test]
    fn test_classify_unmatched_is_misc() {
        assert_eq!(Category::classify("notes.unknownext"), Category::Misc);
        assert_eq!(Category::classify("archive.xyz"), Category::Misc);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        // The table stores lowercase suffixes and matching is literal.
        assert_eq!(Category::classify("PHOTO.JPG"), Category::Misc);
        assert_eq!(Category::classify("script.PY"), Category::Misc);
    }

    #[test]
    fn test_classify_first_match_wins() {
        assert_eq!(Category::classify("logs.tar.gz"), Category::ZipFiles);
    }

    #[test]
    fn test_routing_only_categories_have_no_extensions() {
        assert!(Category::Misc.extensions().is_empty());
        assert!(Category::DeleteMe.extensions().is_empty());
        assert!(Category::LargeFiles.extensions().is_empty());
    }

    #[test]
    fn test_from_dir_name() {
        assert_eq!(Category::from_dir_name("media"), Some(Category::Media));
        assert_eq!(
            Category::from_dir_name("zip files"),
            Some(Category::ZipFiles)
        );
        assert_eq!(Category::from_dir_name("attic"), None);
    }
}
