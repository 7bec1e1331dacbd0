fn main() {
    dioxus::launch(portfolio_app::routes::App);
}
