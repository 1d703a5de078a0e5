//! Shared HTML components used across all pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{Markup, PreEscaped, html};

/// Inline CSS for all pages.
///
/// The card itself is dark by design (near-black panel, violet accent), so
/// the whole page uses the dark palette rather than following the client
/// color scheme.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#111827;--panel:#030712;--tile:#1f2937;--tile2:#374151;--fg:#fff;--fg2:#d1d5db;--fg3:#9ca3af;--accent:#a855f7;--accent-soft:#c084fc;--accent-faint:#d8b4fe;--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:896px;width:100%;flex:1}
a{color:var(--accent-soft);text-decoration:none}
a:hover{text-decoration:underline}
img{max-width:100%;height:auto}

.masthead{text-align:center;margin-bottom:1.5rem}
.masthead h1{font-size:1.9rem;font-weight:800;letter-spacing:-.03em}
.masthead .dot{color:var(--accent)}
.masthead p{color:var(--fg3);font-size:.95rem}

.lookup-form{display:flex;gap:.6rem;max-width:480px;margin:0 auto 1.5rem}
.lookup-form input{flex:1;padding:.6rem .9rem;border-radius:8px;border:1px solid var(--tile2);background:var(--panel);color:var(--fg);font-size:.95rem;outline:none}
.lookup-form input:focus{border-color:var(--accent)}
.lookup-form button{padding:.6rem 1.2rem;border-radius:8px;border:none;background:var(--accent);color:#fff;font-size:.95rem;font-weight:600;cursor:pointer}
.lookup-form button:hover{background:var(--accent-soft)}

.state-msg{text-align:center;color:var(--fg3);padding:3rem 1rem;font-size:1.05rem}
.state-msg .hint{font-size:.85rem;margin-top:.5rem}

.card{background:var(--panel);border-radius:16px;padding:1.5rem;display:flex;flex-direction:column;gap:1.5rem;box-shadow:0 18px 45px rgba(0,0,0,.45)}
.card-header{display:flex;justify-content:space-between;align-items:center;gap:1rem;flex-wrap:wrap}
.card-id{display:flex;align-items:center;gap:1rem;min-width:0}
.card-avatar{width:80px;height:80px;border-radius:50%;border:2px solid var(--accent);background:var(--tile2);flex-shrink:0;display:flex;align-items:center;justify-content:center;color:var(--fg2);font-weight:700;font-size:1.8rem;text-transform:uppercase;overflow:hidden;position:relative}
.card-avatar img{position:absolute;inset:0;width:100%;height:100%;object-fit:cover}
.card-name{font-size:1.9rem;font-weight:700;color:var(--accent-soft);line-height:1.2}
.card-real{font-size:.9rem;color:var(--fg2)}
.card-country,.card-status{font-size:.8rem;color:var(--fg3)}
.card-qr{background:#fff;padding:8px;border-radius:12px;flex-shrink:0;line-height:0}

.stats-grid{display:grid;grid-template-columns:repeat(4,1fr);gap:1rem;text-align:center}
.stat-tile{background:var(--tile);border-radius:12px;padding:1rem 0}
.stat-emoji{color:var(--accent-faint);font-size:1.15rem}
.stat-label{font-size:.85rem;color:var(--fg2)}
.stat-value{font-weight:700}
@media(max-width:640px){.stats-grid{grid-template-columns:repeat(2,1fr)}}

.games-grid{display:grid;grid-template-columns:1fr 1fr;gap:1.5rem}
@media(max-width:640px){.games-grid{grid-template-columns:1fr}}
.games-title{font-size:1.1rem;font-weight:600;color:var(--accent-faint);margin-bottom:.75rem}
.games-list{display:flex;flex-direction:column;gap:.75rem}
.game-row{display:flex;align-items:center;gap:.75rem;background:var(--tile);border-radius:8px;padding:.75rem}
.game-icon{width:48px;height:48px;border-radius:4px;background:var(--tile2);flex-shrink:0;display:flex;align-items:center;justify-content:center;color:var(--accent-faint);font-weight:700;text-transform:uppercase;overflow:hidden;position:relative}
.game-icon img{position:absolute;inset:0;width:100%;height:100%;object-fit:cover}
.game-name{font-size:.9rem;font-weight:500;overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.game-time{font-size:.78rem;color:var(--fg3)}

.exports{display:flex;justify-content:center;gap:.75rem;margin-top:1.25rem}
.export-btn{display:inline-flex;align-items:center;padding:.55rem 1.1rem;background:var(--accent);color:#fff;border-radius:6px;font-size:.9rem;font-weight:500;text-decoration:none;transition:background .15s}
.export-btn:hover{background:var(--accent-soft);text-decoration:none}

.footer{text-align:center;margin-top:1.5rem;padding-top:.75rem;font-size:.8rem;color:var(--fg3);letter-spacing:.01em;width:100%;max-width:896px}
.footer a{color:var(--accent-soft);text-decoration:none}
.footer a:hover{text-decoration:underline}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#111827;color:#e5e7eb;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#9ca3af;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#c084fc}
"#;

/// Content-Security-Policy header value.
///
/// Allows inline styles and the inline image-fallback handlers.
/// No external scripts, no iframes, remote images over HTTPS/HTTP only.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; script-src 'unsafe-inline'; img-src https: http: data:; form-action 'self'; frame-ancestors 'none'";

/// Render the full HTML page shell with `<head>` and body content.
///
/// `refresh_secs` emits a `<meta http-equiv="refresh">`, used by the loading
/// view so the page converges on the lookup outcome without any script.
pub fn page_shell(
    title: &str,
    description: &str,
    refresh_secs: Option<u16>,
    body_content: Markup,
    site_name: &str,
) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);

                meta property="og:title" content=(title);
                meta property="og:description" content=(description);
                meta property="og:site_name" content=(site_name);
                meta property="og:type" content="website";

                @if let Some(secs) = refresh_secs {
                    meta http-equiv="refresh" content=(secs);
                }

                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main { (body_content) }
                footer class="footer" {
                    "Profile data courtesy of the "
                    a href="https://steamcommunity.com/dev" { "Steam Web API" }
                    "."
                }
            }
        }
    }
}

/// Render the masthead and the lookup form shown on every state of `/`.
pub fn lookup_form(site_name: &str) -> Markup {
    html! {
        div class="masthead" {
            h1 { (site_name) span class="dot" { "." } }
            p { "Turn a public Steam profile into a shareable business card." }
        }
        form class="lookup-form" action="/lookup" method="get" {
            input type="text" name="steam_id" placeholder="SteamID64 or vanity name"
                autocomplete="off" spellcheck="false" required;
            button type="submit" { "Generate card" }
        }
    }
}

/// Check if a URL is safe to use in `src` or `href` attributes.
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Truncate a string to a maximum length, appending "..." if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len;
        while !s.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// The uppercased initial used by avatar and icon placeholders.
pub fn initial(name: &str) -> String {
    name.chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .to_string()
}
