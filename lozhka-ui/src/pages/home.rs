use maud::{Markup, html};

use crate::layout::main_layout;
use crate::model::{FEATURE_CARDS, FeatureCard, HOME_HEADLINE, HOME_SUBHEADLINE};

/// Главная страница: заголовок, подзаголовок и сетка из трёх карточек.
pub fn home() -> Markup {
    main_layout(html! {
        div class="text-center" {
            h1 class="text-4xl font-bold mb-4" { (HOME_HEADLINE) }
            p class="text-xl text-gray-600 mb-8" { (HOME_SUBHEADLINE) }
            div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-4xl mx-auto" {
                @for card in &FEATURE_CARDS {
                    (feature_card(card))
                }
            }
        }
    })
}

fn feature_card(card: &FeatureCard) -> Markup {
    html! {
        div class="p-6 bg-white rounded-lg shadow-md" {
            h3 class="text-lg font-semibold mb-2" { (card.title) }
            p class="text-gray-600" { (card.description) }
        }
    }
}
