// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

/// Replace the formula `<` with ` < ` so the browser does not read it as the
/// start of a tag before the math pass gets to see it.
fn formula_disambiguate(s: &str) -> String {
    s.replace('<', " < ")
}

/// Apply [`formula_disambiguate`] to every `$...$` and `$$...$$` segment of
/// `text`. An unterminated delimiter and everything after it is left as is.
pub fn disambiguate_math(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('$') {
        output.push_str(&rest[..start]);
        let delimiter = match rest[start..].starts_with("$$") {
            true => "$$",
            false => "$",
        };
        let body_start = start + delimiter.len();
        let Some(len) = rest[body_start..].find(delimiter) else {
            output.push_str(&rest[start..]);
            return output;
        };
        let body_end = body_start + len;
        output.push_str(delimiter);
        output.push_str(&formula_disambiguate(&rest[body_start..body_end]));
        output.push_str(delimiter);
        rest = &rest[body_end + delimiter.len()..];
    }

    output.push_str(rest);
    output
}
