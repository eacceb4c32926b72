// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::Utf8Path;

pub fn split_file_name(path: &Utf8Path) -> Option<(&Utf8Path, &str)> {
    let mut components = path.components();
    let name = components.next_back();
    let base = components.as_path();
    Some((base, name?.as_str()))
}

/// `name` with `.html` appended unless pretty URLs are on.
pub fn page_url(name: &str, pretty_urls: bool) -> String {
    match pretty_urls {
        true => name.to_string(),
        false => format!("{}.html", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_base() {
        assert_eq!(split_file_name("a/b".into()), Some(("a".into(), "b")));
        assert_eq!(split_file_name("a/b/c".into()), Some(("a/b".into(), "c")));
        assert_eq!(split_file_name("/".into()), Some(("".into(), "/")));
        assert_eq!(split_file_name("a".into()), Some(("".into(), "a")));
    }

    #[test]
    fn test_page_url() {
        assert_eq!(page_url("0-1-2", false), "0-1-2.html");
        assert_eq!(page_url("0-1-2", true), "0-1-2");
    }
}
