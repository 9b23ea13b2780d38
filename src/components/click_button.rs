use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ClickButtonProps {
    pub disabled: bool,
    /// Short highlight after a successful click.
    pub pulse: bool,
    pub on_click: Callback<()>,
}

#[function_component]
pub fn ClickButton(props: &ClickButtonProps) -> Html {
    let onclick = {
        let cb = props.on_click.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let mut style = String::from(
        "position:relative; overflow:hidden; width:256px; height:256px; border-radius:50%; border:none; \
         background:linear-gradient(135deg,#facc15,#f59e0b,#ca8a04); box-shadow:0 25px 50px -12px rgba(0,0,0,0.6); \
         transition:all 200ms; display:flex; align-items:center; justify-content:center;",
    );
    if props.pulse {
        style.push_str(" transform:scale(0.95); box-shadow:0 0 48px rgba(234,179,8,0.5);");
    }
    if props.disabled {
        style.push_str(" opacity:0.5; cursor:not-allowed;");
    } else {
        style.push_str(" cursor:pointer;");
    }
    // Cotton candy on a stick, stacked blobs over a white stick.
    let blob = |w: u32, h: u32, top: i32, color: &str, opacity: f64| -> Html {
        let s = format!(
            "position:absolute; width:{w}px; height:{h}px; top:{top}px; left:50%; transform:translateX(-50%); \
             border-radius:9999px; background:{color}; opacity:{opacity};"
        );
        html! { <div style={s} /> }
    };
    html! {
        <button {onclick} disabled={props.disabled} style={style}>
            <div style="display:flex; flex-direction:column; align-items:center; position:relative;">
                <div style="position:relative;">
                    <div style="width:8px; height:64px; background:#fff; border-radius:9999px; margin:0 auto 8px auto;" />
                    { blob(80, 48, -32, "linear-gradient(to top,#60a5fa,#93c5fd)", 0.9) }
                    { blob(96, 56, -64, "linear-gradient(to bottom,#f472b6,#f9a8d4)", 0.9) }
                    { blob(64, 32, -56, "linear-gradient(to bottom left,#f9a8d4,transparent)", 0.6) }
                </div>
                <span style="font-size:18px; font-weight:700; margin-top:32px; color:#78350f;">{"КЛИК"}</span>
            </div>
        </button>
    }
}
