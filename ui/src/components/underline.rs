use dioxus::prelude::*;

/// Marker stroke drawn with a rough filter; `pathLength` drives the CSS draw-in.
const MARK_SVG: &str = r##"<svg class="underline__mark" width="100%" height="22" viewBox="0 0 100 22" preserveAspectRatio="none" aria-hidden="true">
  <defs>
    <filter id="underline-rough" x="-100%" y="-400%" width="300%" height="900%">
      <feTurbulence type="fractalNoise" baseFrequency="1.2" numOctaves="2" seed="7" result="noise"/>
      <feDisplacementMap in="SourceGraphic" in2="noise" scale="2.5"/>
    </filter>
    <linearGradient id="underline-red" x1="0" x2="1" y1="0" y2="0">
      <stop offset="0%" stop-color="#ff3338"/>
      <stop offset="100%" stop-color="#e8151c"/>
    </linearGradient>
  </defs>
  <path class="underline__stroke" d="M2 14 C 22 12.4, 48 15.1, 72 13.3 S 94 13.9, 98 14" fill="none" stroke="url(#underline-red)" stroke-width="12" stroke-linecap="round" stroke-linejoin="round" filter="url(#underline-rough)" pathLength="100"/>
  <path class="underline__flick" d="M93 14 C 96 14.6, 98.5 15, 100 15.6" fill="none" stroke="url(#underline-red)" stroke-width="6.5" stroke-linecap="round" filter="url(#underline-rough)" pathLength="25"/>
</svg>"##;

/// Wraps `children` with a hand-drawn marker underline.
#[component]
pub fn Underline(children: Element) -> Element {
    rsx! {
        span { class: "underline",
            span { class: "underline__text", {children} }
            span { class: "underline__mark-slot", dangerous_inner_html: MARK_SVG }
        }
    }
}
