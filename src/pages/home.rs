//! The portfolio page.

use dioxus::prelude::*;

use crate::components::{
    About, Contact, EffectLayer, Footer, Hero, NavHeader, ProjectShowcase, ProofCarousel,
    StatsBar, TestimonialCarousel,
};

#[component]
pub fn Home() -> Element {
    rsx! {
        EffectLayer {}
        NavHeader {}
        main { class: "home",
            Hero {}
            StatsBar {}
            About {}
            ProjectShowcase {}
            ProofCarousel {}
            TestimonialCarousel {}
            Contact {}
        }
        Footer {}
    }
}
