use yew::prelude::*;

pub const FALLBACK_ICON: &str = "CircleAlert";

/// SVG path data (24x24 viewbox, stroked) for the named icons we ship.
pub fn icon_paths(name: &str) -> Option<&'static [&'static str]> {
    let paths: &'static [&'static str] = match name {
        "ArrowLeft" => &["m12 19-7-7 7-7", "M19 12H5"],
        "CircleAlert" => &[
            "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0",
            "M12 8v4",
            "M12 16h.01",
        ],
        "House" => &[
            "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8",
            "M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
        ],
        "Zap" => &[
            "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
        ],
        _ => return None,
    };
    Some(paths)
}

/// Paths for `name`, or for `fallback` when `name` is unknown.
pub fn resolve_icon(name: &str, fallback: &str) -> &'static [&'static str] {
    icon_paths(name)
        .or_else(|| icon_paths(fallback))
        .or_else(|| icon_paths(FALLBACK_ICON))
        .unwrap_or(&[])
}

#[derive(Properties, PartialEq, Clone)]
pub struct IconProps {
    pub name: AttrValue,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or(AttrValue::Static(FALLBACK_ICON))]
    pub fallback: AttrValue,
}

#[function_component]
pub fn Icon(props: &IconProps) -> Html {
    let paths = resolve_icon(&props.name, &props.fallback);
    let size = props.size.to_string();
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width={size.clone()} height={size} viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"
            style={props.style.clone()}>
            { for paths.iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_icons_resolve() {
        assert_eq!(resolve_icon("ArrowLeft", FALLBACK_ICON).len(), 2);
        assert_eq!(resolve_icon("Zap", FALLBACK_ICON).len(), 1);
    }

    #[test]
    fn unknown_icon_uses_fallback() {
        assert_eq!(resolve_icon("Rocket", "House"), resolve_icon("House", "House"));
        assert_eq!(resolve_icon("Rocket", "Nope"), resolve_icon(FALLBACK_ICON, FALLBACK_ICON));
    }
}
