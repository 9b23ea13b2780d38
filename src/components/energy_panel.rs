use super::icon::Icon;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EnergyPanelProps {
    pub energy: u32,
    pub cap: u32,
    /// Bar fill, 0..=100.
    pub percent: f64,
}

#[function_component]
pub fn EnergyPanel(props: &EnergyPanelProps) -> Html {
    let bar_style = format!(
        "height:100%; width:{:.1}%; background:linear-gradient(to right,#3b82f6,#a855f7); transition:width 300ms;",
        props.percent
    );
    let hint = if props.energy == 0 {
        html! { <p style="margin:0; color:#f87171; font-weight:500;">{"Энергия закончилась! Подождите восстановления..."}</p> }
    } else {
        html! { <p style="margin:0;">{"Восстановление: +100 каждый час, +1000 каждые 10 часов"}</p> }
    };
    html! {
        <div style="width:100%; max-width:448px; background:rgba(30,41,59,0.5); border:1px solid rgba(168,85,247,0.3); border-radius:12px; padding:24px; box-sizing:border-box;">
            <div style="display:flex; align-items:center; justify-content:space-between; margin-bottom:12px;">
                <span style="display:flex; align-items:center; gap:6px; font-size:18px; font-weight:600; color:#d8b4fe;">
                    <Icon name="Zap" size={18} />{"Энергия"}
                </span>
                <span style="font-size:20px; font-weight:700; font-variant-numeric:tabular-nums;">
                    { format!("{}/{}", props.energy, props.cap) }
                </span>
            </div>
            <div style="width:100%; height:16px; background:#334155; border-radius:9999px; overflow:hidden;">
                <div style={bar_style} />
            </div>
            <div style="margin-top:16px; text-align:center; font-size:14px; color:#94a3b8;">{ hint }</div>
        </div>
    }
}
