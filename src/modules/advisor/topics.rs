use super::decision::{DecisionTree, Leaf};

/// One selectable advisory category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub id: u8,
    pub label: &'static str,
    pub intro: &'static str,
    pub tree: DecisionTree,
}

const fn leaf(solution: &'static str, explanation: &'static str) -> Leaf {
    Leaf {
        solution,
        explanation,
    }
}

pub const TOPIC_COUNT: usize = 13;

/// Topic table, ordered by menu id
pub static TOPICS: [Topic; TOPIC_COUNT] = [
    Topic {
        id: 1,
        label: "Soil problem",
        intro: "Handling soil problem...",
        tree: DecisionTree {
            question: "Is the soil too dry?",
            yes: leaf(
                "Increase the frequency of watering.",
                "Dry soil can harm plant growth. Regular watering keeps soil moisture balanced.",
            ),
            follow_up: "Is the soil too wet?",
            follow_up_yes: leaf(
                "Improve drainage and reduce watering.",
                "Wet soil can lead to root rot. Better drainage helps maintain healthy roots.",
            ),
            fallback: leaf(
                "Test the soil pH and adjust accordingly.",
                "Correct pH levels ensure optimal nutrient uptake by plants.",
            ),
        },
    },
    Topic {
        id: 2,
        label: "Algae problem",
        intro: "Handling algae problem...",
        tree: DecisionTree {
            question: "Is there excessive sunlight on the water surface?",
            yes: leaf(
                "Reduce sunlight exposure by using shades or aquatic plants.",
                "Excessive sunlight promotes algae growth. Shading reduces light penetration.",
            ),
            follow_up: "Is there nutrient runoff from nearby land?",
            follow_up_yes: leaf(
                "Implement buffer zones to reduce nutrient runoff.",
                "Nutrients from runoff feed algae. Buffer zones filter nutrients before they enter the water.",
            ),
            fallback: leaf(
                "Use algaecides or introduce algae-eating fish.",
                "Algaecides kill algae, and algae-eating fish naturally control their population.",
            ),
        },
    },
    Topic {
        id: 3,
        label: "Water quality issues",
        intro: "Handling water quality issues...",
        tree: DecisionTree {
            question: "Is the water cloudy?",
            yes: leaf(
                "Use a water clarifier and check for sediment sources.",
                "Cloudy water can indicate suspended particles. Clarifiers help settle particles.",
            ),
            follow_up: "Is there a bad odor from the water?",
            follow_up_yes: leaf(
                "Aerate the water and remove decaying organic matter.",
                "Aeration increases oxygen levels, which helps break down organic matter causing odors.",
            ),
            fallback: leaf(
                "Test the water for contaminants and treat accordingly.",
                "Contaminants can harm aquatic life. Regular testing ensures water safety.",
            ),
        },
    },
    Topic {
        id: 4,
        label: "Plant health problems",
        intro: "Handling plant health problems...",
        tree: DecisionTree {
            question: "Are the plants showing yellow leaves?",
            yes: leaf(
                "Check for nutrient deficiencies and provide fertilizers.",
                "Yellow leaves often indicate a lack of nutrients. Fertilizers replenish essential nutrients.",
            ),
            follow_up: "Are the plants wilting?",
            follow_up_yes: leaf(
                "Ensure adequate watering and check for pests.",
                "Wilting can result from water stress or pest damage. Proper watering and pest control are crucial.",
            ),
            fallback: leaf(
                "Prune damaged parts and monitor plant health regularly.",
                "Pruning removes unhealthy parts and promotes overall plant health.",
            ),
        },
    },
    Topic {
        id: 5,
        label: "Erosion control",
        intro: "Handling erosion control...",
        tree: DecisionTree {
            question: "Is there visible soil erosion around the water body?",
            yes: leaf(
                "Plant ground cover vegetation to stabilize the soil.",
                "Ground cover plants help hold soil in place, reducing erosion.",
            ),
            follow_up: "Are the banks of the water body collapsing?",
            follow_up_yes: leaf(
                "Use riprap or retaining walls to reinforce the banks.",
                "Riprap and retaining walls provide physical barriers to prevent bank collapse.",
            ),
            fallback: leaf(
                "Implement terracing or contour plowing techniques.",
                "These techniques reduce runoff speed and soil erosion.",
            ),
        },
    },
    Topic {
        id: 6,
        label: "Pest control",
        intro: "Handling pest control...",
        tree: DecisionTree {
            question: "Are there visible pests on the plants?",
            yes: leaf(
                "Use organic or chemical pesticides as appropriate.",
                "Pesticides help control pest populations and protect plant health.",
            ),
            follow_up: "Are there signs of pest damage on the plants?",
            follow_up_yes: leaf(
                "Introduce natural predators to control pest populations.",
                "Natural predators keep pest populations in check without chemicals.",
            ),
            fallback: leaf(
                "Regularly inspect and maintain plant health to prevent infestations.",
                "Early detection and maintenance prevent severe pest issues.",
            ),
        },
    },
    Topic {
        id: 7,
        label: "pH balance",
        intro: "Handling pH balance...",
        tree: DecisionTree {
            question: "Is the pH level too high?",
            yes: leaf(
                "Add sulfur or acidifiers to lower the pH.",
                "Lowering pH creates a more acidic environment, suitable for certain plants.",
            ),
            follow_up: "Is the pH level too low?",
            follow_up_yes: leaf(
                "Add lime or alkaline substances to raise the pH.",
                "Raising pH creates a more alkaline environment, suitable for certain plants.",
            ),
            fallback: leaf(
                "Maintain regular testing and adjust pH levels as needed.",
                "Consistent monitoring ensures the optimal pH for plant growth.",
            ),
        },
    },
    Topic {
        id: 8,
        label: "Nutrient management",
        intro: "Handling nutrient management...",
        tree: DecisionTree {
            question: "Is there excessive nutrient buildup in the water?",
            yes: leaf(
                "Reduce fertilizer use and implement nutrient management plans.",
                "Excessive nutrients can lead to algae blooms. Proper management prevents buildup.",
            ),
            follow_up: "Are the plants showing signs of nutrient deficiency?",
            follow_up_yes: leaf(
                "Apply appropriate fertilizers to address deficiencies.",
                "Fertilizers provide essential nutrients needed for plant growth.",
            ),
            fallback: leaf(
                "Regularly monitor nutrient levels and adjust accordingly.",
                "Regular monitoring helps maintain balanced nutrient levels for healthy plants.",
            ),
        },
    },
    Topic {
        id: 9,
        label: "Aquatic ecosystem management",
        intro: "Handling aquatic ecosystem management...",
        tree: DecisionTree {
            question: "Is the biodiversity of the ecosystem declining?",
            yes: leaf(
                "Introduce native species to restore biodiversity.",
                "Native species support ecosystem balance and biodiversity.",
            ),
            follow_up: "Are there signs of ecosystem imbalance?",
            follow_up_yes: leaf(
                "Monitor and adjust the population dynamics of key species.",
                "Balancing species populations ensures ecosystem health.",
            ),
            fallback: leaf(
                "Implement habitat restoration and conservation practices.",
                "Restoration and conservation improve habitat quality and support biodiversity.",
            ),
        },
    },
    Topic {
        id: 10,
        label: "Sediment control",
        intro: "Handling sediment control...",
        tree: DecisionTree {
            question: "Is there significant sediment buildup in the water?",
            yes: leaf(
                "Use sediment traps and regularly dredge the water body.",
                "Sediment traps capture particles, and dredging removes accumulated sediment.",
            ),
            follow_up: "Is sediment affecting water quality?",
            follow_up_yes: leaf(
                "Implement erosion control measures to reduce sediment runoff.",
                "Erosion control prevents sediment from entering the water, maintaining quality.",
            ),
            fallback: leaf(
                "Regularly monitor sediment levels and maintain sediment control structures.",
                "Regular monitoring and maintenance ensure effective sediment control.",
            ),
        },
    },
    Topic {
        id: 11,
        label: "Invasive species management",
        intro: "Handling invasive species management...",
        tree: DecisionTree {
            question: "Are there invasive species present in the ecosystem?",
            yes: leaf(
                "Use mechanical, chemical, or biological methods to control invasive species.",
                "Different methods target invasive species to protect the ecosystem.",
            ),
            follow_up: "Are the invasive species causing ecosystem damage?",
            follow_up_yes: leaf(
                "Implement management plans to mitigate damage.",
                "Management plans address the impact of invasive species and restore balance.",
            ),
            fallback: leaf(
                "Regularly monitor and manage for early detection of invasive species.",
                "Early detection and management prevent widespread issues.",
            ),
        },
    },
    Topic {
        id: 12,
        label: "Water filtration systems",
        intro: "Handling water filtration systems...",
        tree: DecisionTree {
            question: "Is the water filtration system not functioning properly?",
            yes: leaf(
                "Check and replace filters as needed.",
                "Replacing filters maintains effective water filtration.",
            ),
            follow_up: "Is there a decrease in water flow rate?",
            follow_up_yes: leaf(
                "Inspect and clean the filtration system.",
                "Cleaning improves flow rate and system efficiency.",
            ),
            fallback: leaf(
                "Regularly maintain and service the filtration system.",
                "Regular maintenance ensures optimal performance and water quality.",
            ),
        },
    },
    Topic {
        id: 13,
        label: "Fish health and management",
        intro: "Handling fish health and management...",
        tree: DecisionTree {
            question: "Are the fish showing signs of disease?",
            yes: leaf(
                "Isolate and treat the affected fish with appropriate medications.",
                "Treating sick fish prevents disease spread and maintains fish health.",
            ),
            follow_up: "Is the fish population declining?",
            follow_up_yes: leaf(
                "Ensure adequate food supply and suitable habitat conditions.",
                "Proper nutrition and habitat conditions support a healthy fish population.",
            ),
            fallback: leaf(
                "Regularly monitor fish health and manage the ecosystem to support fish populations.",
                "Monitoring and management practices help sustain a healthy aquatic environment.",
            ),
        },
    },
];
