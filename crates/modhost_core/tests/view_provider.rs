use modhost_core::{StaticViewProvider, View, ViewProvider};

struct BannerViewProvider;

impl ViewProvider for BannerViewProvider {
    fn create_view(&self) -> View {
        let mut view = View::new("banner");
        view.set_property("title", "welcome");
        view
    }
}

#[test]
fn each_call_yields_an_independently_mutable_view() {
    let mut provider = StaticViewProvider::new("splash");
    provider.insert_property("background_color", "#ffffff");

    let first = provider.create_view();
    let mut second = provider.create_view();
    assert_ne!(first.instance_id(), second.instance_id());

    second.set_property("background_color", "#000000");
    assert_eq!(first.property("background_color"), Some("#ffffff"));
    assert_eq!(second.property("background_color"), Some("#000000"));
}

#[test]
fn host_holds_the_provider_behind_the_trait() {
    // The host never depends on a concrete producer type.
    let providers: Vec<Box<dyn ViewProvider>> = vec![
        Box::new(StaticViewProvider::new("splash")),
        Box::new(BannerViewProvider),
    ];

    let kinds: Vec<String> = providers
        .iter()
        .map(|provider| provider.create_view().kind().to_string())
        .collect();
    assert_eq!(kinds, vec!["splash".to_string(), "banner".to_string()]);
}

#[test]
fn provider_can_be_called_many_times() {
    let provider = BannerViewProvider;
    let mut seen_ids = Vec::new();
    for _ in 0..8 {
        let view = provider.create_view();
        assert_eq!(view.property("title"), Some("welcome"));
        assert!(!seen_ids.contains(&view.instance_id()));
        seen_ids.push(view.instance_id());
    }
}
