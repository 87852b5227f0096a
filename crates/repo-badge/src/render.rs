//! SVG templates for the counted and fallback badges.

use crate::resolution::ResolutionResult;

const BADGE_LABEL: &str = "Repositories";
const FONT_STACK: &str = "system-ui, -apple-system, 'Segoe UI', Roboto, Arial";

const GRADIENT_LEFT: &str = "#0ea5a4";
const GRADIENT_RIGHT: &str = "#0b1220";
const ACCENT: &str = "#06b6d4";

const GITHUB_MARK: &str = "M10 0C4.48 0 0 4.48 0 10c0 4.42 2.87 8.16 6.84 9.49.5.09.68-.22.68-.48 0-.24-.01-.87-.01-1.7-2.78.6-3.37-1.34-3.37-1.34-.46-1.15-1.11-1.46-1.11-1.46-.91-.62.07-.61.07-.61 1 .07 1.54 1.03 1.54 1.03.89 1.53 2.34 1.09 2.91.83.09-.65.35-1.09.64-1.34-2.22-.25-4.56-1.11-4.56-4.95 0-1.09.39-1.99 1.03-2.69-.1-.25-.45-1.27.1-2.65 0 0 .84-.27 2.75 1.03A9.57 9.57 0 0110 5.8c.85 0 1.71.12 2.5.34 1.91-1.29 2.75-1.03 2.75-1.03.55 1.38.2 2.39.1 2.65.64.7 1.03 1.59 1.03 2.69 0 3.85-2.34 4.69-4.57 4.94.36.31.68.92.68 1.85 0 1.34-.01 2.42-.01 2.74 0 .27.18.58.69.48A10.01 10.01 0 0020 10C20 4.48 15.52 0 10 0z";

/// Escapes the five XML special characters.
pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

/// Renders `result` for the account shown as `name`.
pub fn render_badge(name: &str, result: &ResolutionResult) -> String {
    match result {
        ResolutionResult::Counted { count, source } => {
            counted_badge(name, *count, source.as_str())
        }
        ResolutionResult::Unavailable { reason } => fallback_badge(reason.as_str()),
    }
}

pub fn counted_badge(name: &str, count: u64, note: &str) -> String {
    let (w, h) = (360, 88);
    let name = escape_xml(name);
    let note = escape_xml(note);
    let count_x = w - 180;

    format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-labelledby="title desc">
  <title id="title">{name} - {BADGE_LABEL} badge</title>
  <desc id="desc">Shows the repository count for {name}</desc>
  <defs>
    <linearGradient id="g" x1="0" x2="1" y1="0" y2="0">
      <stop offset="0%" stop-color="{GRADIENT_LEFT}" stop-opacity="0.98"/>
      <stop offset="100%" stop-color="{GRADIENT_RIGHT}" stop-opacity="0.98"/>
    </linearGradient>
    <filter id="shadow" x="-50%" y="-50%" width="200%" height="200%">
      <feDropShadow dx="0" dy="4" stdDeviation="8" flood-color="#000" flood-opacity="0.12"/>
    </filter>
  </defs>
  <rect rx="14" ry="14" width="{w}" height="{h}" fill="url(#g)" filter="url(#shadow)"/>
  <g transform="translate(20,20)" fill="#fff" font-family="{FONT_STACK}">
    <path aria-hidden="true" d="{GITHUB_MARK}"/>
    <text x="62" y="28" font-size="20" font-weight="700">{name}</text>
    <text x="62" y="46" font-size="12" opacity="0.9">{BADGE_LABEL}</text>
  </g>
  <g transform="translate({count_x}, 22)" font-family="{FONT_STACK}">
    <rect rx="12" ry="12" width="150" height="44" fill="#010617" opacity="0.06"/>
    <text x="75" y="30" font-size="30" font-weight="900" fill="{ACCENT}" text-anchor="middle">{count}</text>
    <text x="75" y="46" font-size="10" fill="#cfeefc" text-anchor="middle" opacity="0.9">{note}</text>
  </g>
</svg>
"##
    )
}

pub fn fallback_badge(message: &str) -> String {
    let (w, h) = (360, 72);
    let message = escape_xml(message);

    format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-labelledby="title desc">
  <title id="title">{BADGE_LABEL}</title>
  <desc id="desc">{message}</desc>
  <defs><linearGradient id="g" x1="0" x2="1"><stop offset="0%" stop-color="{GRADIENT_LEFT}"/><stop offset="100%" stop-color="{GRADIENT_RIGHT}"/></linearGradient></defs>
  <rect rx="12" width="{w}" height="{h}" fill="url(#g)"/>
  <g font-family="{FONT_STACK}" fill="#fff">
    <text x="20" y="36" font-size="16" font-weight="700">{BADGE_LABEL}</text>
    <text x="20" y="54" font-size="12" opacity="0.9">{message}</text>
  </g>
</svg>
"##
    )
}
