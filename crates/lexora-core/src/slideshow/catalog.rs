//! Platform preview slides

use super::Slide;

pub const SHOWCASE_SLIDES: &[Slide] = &[
    Slide {
        id: 1,
        image_ref: "https://placehold.co/1200x800/101010/333?text=Lexora+Dashboard",
        title: "Pregledna nadzorna plošča",
        description: "Vsi vaši primeri in dokumenti na enem mestu.",
    },
    Slide {
        id: 2,
        image_ref: "https://placehold.co/1200x800/101010/333?text=AI+Chat+Interface",
        title: "Pametni klepet",
        description: "Postavljajte vprašanja in prejmite takojšnje odgovore.",
    },
    Slide {
        id: 3,
        image_ref: "https://placehold.co/1200x800/101010/333?text=Legal+Analysis",
        title: "Analiza dokumentov",
        description: "Samodejno zaznavanje tveganj v pogodbah.",
    },
];
