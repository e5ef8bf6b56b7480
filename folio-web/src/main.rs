//! folio - personal portfolio site

fn main() {
    dioxus::launch(folio_web::App);
}
