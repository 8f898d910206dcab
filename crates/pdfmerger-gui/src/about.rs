//! Static text of the About window.

use chrono::Datelike;

const LICENSE: &str = "\
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.";

/// About text for the given copyright year.
pub fn about_text(year: i32) -> String {
    format!(
        "{title}\nVersion: {version}\n\nCopyright \u{00A9} {year} {authors}\n\n{LICENSE}",
        title = pdfmerger::APP_TITLE,
        version = pdfmerger::VERSION,
        authors = env!("CARGO_PKG_AUTHORS"),
    )
}

/// About text stamped with the current local year.
pub fn current_about_text() -> String {
    about_text(chrono::Local::now().year())
}
