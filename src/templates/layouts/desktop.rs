use maud::{html, Markup, PreEscaped, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

// Results are scrolled to after a short pause so layout can settle first.
// Runs on full loads and after every htmx swap.
const SCROLL_SCRIPT: &str = r#"
function scrollToResults() {
  var el = document.querySelector('#resultsContainer[data-scroll-delay-ms]');
  if (!el) { return; }
  var delay = parseInt(el.getAttribute('data-scroll-delay-ms'), 10) || 0;
  el.removeAttribute('data-scroll-delay-ms');
  setTimeout(function () { el.scrollIntoView({ behavior: 'smooth' }); }, delay);
}
document.addEventListener('DOMContentLoaded', scrollToResults);
document.addEventListener('htmx:afterSettle', scrollToResults);
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src=(HTMX_SRC) defer {};
                script { (PreEscaped(SCROLL_SCRIPT)) }
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    h3 { "Wholesale Pricing Lookup" }
                }
                (content)
            }
        }
    }
}
