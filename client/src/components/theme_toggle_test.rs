const STYLESHEET: &str = include_str!("../../style/main.css");

fn rule(selector: &str) -> Option<&'static str> {
    let start = STYLESHEET.find(&format!("{selector} {{"))?;
    let body = &STYLESHEET[start..];
    body.find('}').map(|end| &body[..=end])
}

#[test]
fn toggle_grows_on_hover() {
    let hover = rule(".theme-toggle:hover").expect("hover rule");
    assert!(hover.contains("scale(1.1)"), "{hover}");
}

#[test]
fn press_outranks_hover() {
    let pressed = rule(".theme-toggle.theme-toggle--pressed").expect("pressed rule");
    assert!(pressed.contains("rotate(180deg)"), "{pressed}");
}
