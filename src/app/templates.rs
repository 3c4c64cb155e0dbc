use crate::app::models::Extension;

/// Characters of the payload placed in a stylesheet `content` property.
pub const CSS_CONTENT_CHARS: usize = 30;

/// Wraps a raw ASCII-letter payload in the minimal shell for `extension`.
/// `title` is only used by the markup template.
pub fn wrap(extension: Extension, payload: &str, title: &str) -> String {
    match extension {
        Extension::Html => format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             \x20 <meta charset=\"utf-8\">\n\
             \x20 <title>{}</title>\n\
             </head>\n\
             <body>\n\
             \x20 <p>{}</p>\n\
             </body>\n\
             </html>\n",
            title, payload
        ),
        Extension::Js => format!(
            "(function () {{\n  const data = \"{}\";\n  return data.length;\n}})();\n",
            payload
        ),
        Extension::Css => {
            let head: String = payload.chars().take(CSS_CONTENT_CHARS).collect();
            format!(".fixture::after {{\n  content: \"{}\";\n}}\n", head)
        }
        Extension::Txt => payload.to_string(),
    }
}
