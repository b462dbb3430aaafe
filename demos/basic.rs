use relurl::{BaseUrl, Overrides};

fn main() {
    // The page whose links are being rewritten
    let page = BaseUrl::parse("https://example.com/docs/guide/index.html?lang=en")
        .expect("Failed to parse URL");

    println!("Page: {page}"); // https://example.com/docs/guide/index.html?lang=en
    println!("Host: {}", page.host()); // example.com
    println!("Path: {}", page.path()); // /docs/guide/index.html
    println!("Basename: {}", page.basename()); // index.html

    for href in ["../api/", "//cdn.example.net/app.js", "?lang=fr", "#top", "mailto:docs@example.com"] {
        println!("{href:>28} -> {}", page.translate(href));
    }

    // Same page, different query
    let french = page.with_overrides(Overrides::new().query("lang=fr"));
    println!("French: {french}"); // https://example.com/docs/guide/index.html?lang=fr
}
