use before_after_slider::{BeforeAfterSlider, FetchPriority, LoadingHint, SliderConfig};
use leptos::prelude::*;

use crate::components::{Direction, FadeIn};
use crate::content::Hero as HeroContent;

#[component]
pub fn Hero(hero: HeroContent, slider: SliderConfig) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-grid">
                <FadeIn direction=Direction::Right>
                    <div class="hero-content">
                        <h1 class="hero-title">
                            {hero.title}
                            " "
                            <span class="hero-title-accent">{hero.title_accent}</span>
                        </h1>
                        <p class="hero-description">{hero.description}</p>
                        <a href=hero.cta_href class="btn btn-primary btn-large">
                            {hero.cta_label}
                        </a>
                    </div>
                </FadeIn>
                <FadeIn direction=Direction::Left delay=200>
                    // Above the fold: fetch both images right away.
                    <BeforeAfterSlider
                        before=hero.before
                        after=hero.after
                        loading=LoadingHint::Eager
                        fetch_priority=FetchPriority::High
                        config=slider
                        label="Paver restoration before and after"
                    />
                </FadeIn>
            </div>
        </section>
    }
}
