//! Display helpers for HTML-encoded labels
//!
//! The bank HTML-encodes every text field it serves: category names arrive
//! as `Science &amp; Nature`, question text carries `&quot;` and `&#039;`.
//! The core client passes those payloads through verbatim; these helpers are
//! for presentation layers that need readable text or need to match category
//! labels across sources.

/// Decode the HTML entities the bank embeds in payload strings.
///
/// Handles the named entities observed in bank payloads plus decimal and
/// hexadecimal numeric references. Unrecognized entities are passed through
/// unchanged rather than dropped.
pub fn decode_html_entities(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('&') {
        output.push_str(&rest[..start]);
        let candidate = &rest[start..];

        match candidate.find(';') {
            // Entities are short; a distant semicolon means this '&' is literal
            Some(end) if end <= 10 => {
                let entity = &candidate[1..end];
                match decode_entity(entity) {
                    Some(decoded) => output.push(decoded),
                    None => output.push_str(&candidate[..=end]),
                }
                rest = &candidate[end + 1..];
            }
            _ => {
                output.push('&');
                rest = &candidate[1..];
            }
        }
    }

    output.push_str(rest);
    output
}

fn decode_entity(entity: &str) -> Option<char> {
    if let Some(numeric) = entity.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        "ndash" => Some('\u{2013}'),
        "mdash" => Some('\u{2014}'),
        "lsquo" => Some('\u{2018}'),
        "rsquo" => Some('\u{2019}'),
        "ldquo" => Some('\u{201C}'),
        "rdquo" => Some('\u{201D}'),
        "hellip" => Some('\u{2026}'),
        "eacute" => Some('\u{00E9}'),
        "uuml" => Some('\u{00FC}'),
        "ouml" => Some('\u{00F6}'),
        _ => None,
    }
}

/// Normalize a category label for robust matching across sources.
///
/// Decodes entities, unifies spacing around ampersands (`A & B` -> `A&B`)
/// and colons (`A :B` -> `A: B`), collapses whitespace, trims, and
/// lowercases.
pub fn normalize_category_label(label: &str) -> String {
    let decoded = decode_html_entities(label);

    let mut normalized = String::with_capacity(decoded.len());
    for part in decoded.split('&') {
        if !normalized.is_empty() {
            normalized.push('&');
        }
        normalized.push_str(part.trim());
    }

    let mut spaced = String::with_capacity(normalized.len());
    for (index, part) in normalized.split(':').enumerate() {
        if index > 0 {
            spaced.push_str(": ");
        }
        spaced.push_str(part.trim());
    }

    spaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Alternative lookup keys for a category label: the full normalized name,
/// plus the child segment after the first colon when present
/// (`entertainment: video games` also matches `video games`).
pub fn category_name_keys(label: &str) -> Vec<String> {
    let full = normalize_category_label(label);
    let mut keys = vec![full.clone()];

    if let Some((_, child)) = full.split_once(':') {
        let child = child.trim();
        if !child.is_empty() && child != full {
            keys.push(child.to_string());
        }
    }

    keys
}
