//! Narrative catalog and path sequences.

use game_core::{
    Choice, ChoiceContext, Combatant, Item, NarrativeScenario, NodeKind, StatBlock, StatKind,
    StoryPath,
};

use crate::items::{AMULET_OF_THE_DAWN, GREATER_HEALTH_POTION, SHADOW_DAGGER};

pub static CROSSROADS: NarrativeScenario = NarrativeScenario {
    id: "crossroads",
    title: "The Crossroads",
    description: "The road splits beneath a dead oak. To the east, a pale glow \
                  over the hills. To the west, a stair descends into darkness.",
    choices: &[
        Choice {
            text: "Take the Path of Light",
            effect: choose_light,
        },
        Choice {
            text: "Take the Path of Shadow",
            effect: choose_shadow,
        },
    ],
};

pub static SUNLIT_SHRINE: NarrativeScenario = NarrativeScenario {
    id: "sunlit_shrine",
    title: "The Sunlit Shrine",
    description: "A small shrine stands in a clearing, its altar catching the \
                  morning sun. Something glints among the offerings.",
    choices: &[
        Choice {
            text: "Kneel and pray",
            effect: pray_at_shrine,
        },
        Choice {
            text: "Take the glinting offering",
            effect: take_offering,
        },
        Choice {
            text: "Walk on",
            effect: walk_on,
        },
    ],
};

pub static WANDERING_HEALER: NarrativeScenario = NarrativeScenario {
    id: "wandering_healer",
    title: "The Wandering Healer",
    description: "An old woman with a satchel of herbs waves you over to her fire.",
    choices: &[
        Choice {
            text: "Accept her healing",
            effect: accept_healing,
        },
        Choice {
            text: "Ask for a potion for the road",
            effect: ask_for_potion,
        },
        Choice {
            text: "Ask her to teach you",
            effect: ask_for_lessons,
        },
    ],
};

pub static FORGOTTEN_CRYPT: NarrativeScenario = NarrativeScenario {
    id: "forgotten_crypt",
    title: "The Forgotten Crypt",
    description: "Dust and silence. A cracked sarcophagus sits beneath walls \
                  covered in faded script.",
    choices: &[
        Choice {
            text: "Read the inscriptions",
            effect: read_inscriptions,
        },
        Choice {
            text: "Search the sarcophagus",
            effect: search_sarcophagus,
        },
        Choice {
            text: "Leave quietly",
            effect: walk_on,
        },
    ],
};

pub static BLOOD_ALTAR: NarrativeScenario = NarrativeScenario {
    id: "blood_altar",
    title: "The Blood Altar",
    description: "A basin of black stone, stained dark. It wants something from you.",
    choices: &[
        Choice {
            text: "Offer a little blood",
            effect: offer_blood,
        },
        Choice {
            text: "Shatter the altar",
            effect: shatter_altar,
        },
    ],
};

/// Every narrative node, including the entry.
pub static NARRATIVES: [&NarrativeScenario; 5] = [
    &CROSSROADS,
    &SUNLIT_SHRINE,
    &WANDERING_HEALER,
    &FORGOTTEN_CRYPT,
    &BLOOD_ALTAR,
];

pub static LIGHT_SEQUENCE: [NodeKind; 5] = [
    NodeKind::Narrative("sunlit_shrine"),
    NodeKind::Combat,
    NodeKind::Narrative("wandering_healer"),
    NodeKind::Combat,
    NodeKind::Boss,
];

pub static SHADOW_SEQUENCE: [NodeKind; 5] = [
    NodeKind::Narrative("forgotten_crypt"),
    NodeKind::Combat,
    NodeKind::Narrative("blood_altar"),
    NodeKind::Combat,
    NodeKind::Boss,
];

// ===== choice effects =====

fn choose_light(ctx: &mut ChoiceContext<'_>) -> String {
    ctx.player.set_path(StoryPath::Light);
    String::from("You turn toward the glow. The path of light lies ahead.")
}

fn choose_shadow(ctx: &mut ChoiceContext<'_>) -> String {
    ctx.player.set_path(StoryPath::Shadow);
    String::from("You descend the stair. The path of shadow swallows you.")
}

fn walk_on(_: &mut ChoiceContext<'_>) -> String {
    String::from("You leave it be and press on.")
}

fn pray_at_shrine(ctx: &mut ChoiceContext<'_>) -> String {
    let healed = ctx.player.health_mut().heal(20);
    ctx.player.add_temporary(StatBlock::single(StatKind::Defense, 2));
    format!("Warmth settles over you. You recover {healed} health and feel protected (+2 defense).")
}

fn take_offering(ctx: &mut ChoiceContext<'_>) -> String {
    let burned = ctx.player.health_mut().drain_non_lethal(10);
    let lead = format!("The shrine's light sears your hand for {burned} damage.");
    grant(ctx, &AMULET_OF_THE_DAWN, &lead)
}

fn accept_healing(ctx: &mut ChoiceContext<'_>) -> String {
    let healed = ctx.player.health_mut().restore_full();
    format!("Her poultice stings, then soothes. You recover {healed} health.")
}

fn ask_for_potion(ctx: &mut ChoiceContext<'_>) -> String {
    grant(ctx, &GREATER_HEALTH_POTION, "She presses a vial into your palm.")
}

fn ask_for_lessons(ctx: &mut ChoiceContext<'_>) -> String {
    experience(ctx, 60, "She shows you where to strike and when to wait.")
}

fn read_inscriptions(ctx: &mut ChoiceContext<'_>) -> String {
    experience(ctx, 40, "The old script speaks of the Lich King's weakness.")
}

fn search_sarcophagus(ctx: &mut ChoiceContext<'_>) -> String {
    if ctx.rng.chance(0.5) {
        grant(ctx, &SHADOW_DAGGER, "Beneath the bones lies a dagger of black glass.")
    } else {
        let lost = ctx.player.health_mut().drain_non_lethal(15);
        format!("A needle trap springs from the lid. You take {lost} damage.")
    }
}

fn offer_blood(ctx: &mut ChoiceContext<'_>) -> String {
    let lost = ctx.player.health_mut().drain_non_lethal(15);
    ctx.player.raise_base(StatKind::Strength, 2);
    format!("The basin drinks {lost} health. Your arms thrum with new strength (+2 strength).")
}

fn shatter_altar(ctx: &mut ChoiceContext<'_>) -> String {
    let lost = ctx.player.health_mut().drain(30);
    if !ctx.player.is_alive() {
        return format!("The altar bursts and the backlash tears through you for {lost} damage.");
    }
    experience(
        ctx,
        80,
        &format!("The altar bursts. You take {lost} damage but something old is freed."),
    )
}

fn grant(ctx: &mut ChoiceContext<'_>, item: &'static Item, lead: &str) -> String {
    match ctx.player.inventory_mut().add(item) {
        Ok(()) => format!("{lead} You receive the {}.", item.name),
        Err(_) => format!("{lead} Your pack is full; you leave the {} behind.", item.name),
    }
}

fn experience(ctx: &mut ChoiceContext<'_>, amount: u32, lead: &str) -> String {
    let levels = ctx.player.gain_experience(amount);
    if levels > 0 {
        format!(
            "{lead} You gain {amount} experience and reach level {}!",
            ctx.player.level()
        )
    } else {
        format!("{lead} You gain {amount} experience.")
    }
}
