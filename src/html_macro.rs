// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

/// Builds one element as a `String`.
///
/// `html!(div class = "x", data_topic = {topic} => (child) {text} "literal")`
///
/// Underscores in attribute names become dashes. Attribute values and
/// children are written as they are, so callers escape what needs escaping.
#[macro_export]
macro_rules! html {
    ($tag:ident $($attr:ident = $value:expr),* => $($child:tt)*) => {{
        let mut element = String::from(concat!("<", stringify!($tag)));
        $(
            element.push(' ');
            element.push_str(&stringify!($attr).replace('_', "-"));
            element.push_str("=\"");
            element.push_str(&ToString::to_string(&$value));
            element.push('"');
        )*
        element.push('>');
        $(
            element.push_str(&ToString::to_string(&$child));
        )*
        element.push_str(concat!("</", stringify!($tag), ">"));
        element
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_element() {
        assert_eq!(html!(h3 => "标题"), "<h3>标题</h3>");
        assert_eq!(html!(div class = "choices" =>), r#"<div class="choices"></div>"#);
    }

    #[test]
    fn test_attributes_and_children() {
        let topic = String::from("数列");
        let html = html!(div class = "category", data_topic = {&topic} =>
          (html!(h3 => {topic}))
          "-" 3);
        assert_eq!(
            html,
            r#"<div class="category" data-topic="数列"><h3>数列</h3>-3</div>"#
        );
    }
}
