//! Rule data for cycles 1-5

use atelier_common::Trait::*;

use super::EvolutionRule;

pub static RULES: [EvolutionRule; 5] = [
    EvolutionRule {
        cycle: 1,
        winner: &[(Minimalism, 8), (MarketFit, 5), (Risk, -3)],
        loser: &[(Novelty, 10), (Risk, 6), (Manufacturability, -4)],
        others: &[(TrendSensitivity, 3), (MarketFit, 2)],
        beliefs: &[
            (0, "Restraint sells. Every removed element made the piece stronger."),
            (1, "Buyers reward confidence; hedged designs read as timid."),
            (2, "Colour is a promise. The stone has to carry the story."),
            (3, "A piece nobody can wear is a sculpture, not jewelry."),
            (4, "The market is noisier than it looks. Watch the second tier."),
            (5, "Platinum earns trust before anyone reads the tag."),
            (6, "Symmetry is the grammar; break it only on purpose."),
            (7, "Margins matter, but a forgettable piece has no margin."),
            (8, "Trends are weather. Build for the climate."),
            (9, "Playing it safe finished last. Novelty is the only way back."),
        ],
    },
    EvolutionRule {
        cycle: 2,
        winner: &[(Novelty, 6), (Ornamentation, 4), (Risk, 3)],
        loser: &[(Minimalism, 7), (MarginSensitivity, -5), (Wearability, 4)],
        others: &[(Risk, 2), (Wearability, 3)],
        beliefs: &[
            (0, "One win is a data point. Minimalism needs a second proof."),
            (1, "Detail is not clutter when it has a rhythm."),
            (2, "Coloured stones found their audience in the middle of the pack."),
            (4, "Follow the winner's restraint, not their exact forms."),
            (6, "Balanced proportions held up when the flashier pieces faded."),
            (9, "Novelty alone is not enough. It has to be wearable novelty."),
        ],
    },
    EvolutionRule {
        cycle: 3,
        winner: &[(ComplexityBudget, 5), (Diamond, 4), (Ornamentation, 3)],
        loser: &[(ColoredStone, 8), (Symmetry, -6), (TrendSensitivity, 5)],
        others: &[(Manufacturability, 3), (PricePoint, 2)],
        beliefs: &[
            (0, "The field caught up. Restraint now needs a signature detail."),
            (3, "Comfort is the quiet differentiator this season."),
            (5, "Diamonds are back in the conversation; metal choice frames them."),
            (7, "The winning pieces were buildable. Production is part of design."),
            (8, "The trend I ignored was the one that won."),
        ],
    },
    EvolutionRule {
        cycle: 4,
        winner: &[(PricePoint, 6), (HighJewelry, 5), (Diamond, 3)],
        loser: &[(Wearability, 9), (PricePoint, -7), (Minimalism, 4)],
        others: &[(MixedMetal, 4), (TrendSensitivity, -2)],
        beliefs: &[
            (1, "The audience will pay for ambition if the finish is flawless."),
            (2, "Mixed metals give colour without the risk of stone."),
            (4, "Chasing last cycle's winner keeps me one step behind."),
            (6, "Price signals seriousness; underpricing read as uncertainty."),
            (9, "Pieces must live on the body first and in the case second."),
        ],
    },
    EvolutionRule {
        cycle: 5,
        winner: &[(PlatinumBias, 5), (Symmetry, 4), (MarketFit, 3)],
        loser: &[(Risk, 12), (Novelty, 5), (MarketFit, -4)],
        others: &[(MarketFit, 3), (Minimalism, 2)],
        beliefs: &[
            (0, "Five cycles in, the lesson holds: clarity outlasts novelty."),
            (3, "Wearability compounds. It never wins alone but it never loses."),
            (5, "Platinum and precision. The final cycle rewarded craft."),
            (7, "The market forgives cost; it never forgives a dull piece."),
            (8, "Climate over weather: the durable forms kept scoring."),
        ],
    },
];
