use hn_trends::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
