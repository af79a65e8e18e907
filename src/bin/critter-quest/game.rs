//! Story, menus and battle rendering on top of the library.

use std::time::Duration;

use anyhow::{Context, Result};
use critter_quest::core::{Action, CombatantSummary, GameRng, SessionConfig};
use critter_quest::encounter::{EncounterError, EncounterState, RandomOpponents, TurnReport};
use critter_quest::finale::{DuelOutcome, FinaleChoice, ANTAGONIST_NAME, CHAMPION_NAME};
use critter_quest::persistence::JsonFileStore;
use critter_quest::session::{MenuCommand, Session};

use crate::console::Console;

type GameSession = Session<JsonFileStore, RandomOpponents>;

const MENU_PROMPT: &str = "\nWhat would you like to do? [B]attle | [S]ummary | [Q]uit | [Save]: ";
const BATTLE_PROMPT: &str = "\nChoose action: [A]ttack | [S]ummary | [R]un: ";

pub fn run(config: &SessionConfig) -> Result<()> {
    let mut console = Console::new(config.text_delay);
    let store = JsonFileStore::new(&config.save_path);
    let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    tracing::debug!(seed = rng.seed(), "opponent rng");
    let opponents = RandomOpponents::from_rng(rng);

    let resumed = match Session::resume(store.clone(), opponents.clone()) {
        Ok(resumed) => resumed,
        Err(e) if e.is_malformed() => {
            console.say(&format!("Your save could not be read ({e}). Starting a new adventure."))?;
            None
        }
        Err(e) => return Err(e).context("loading save"),
    };

    let mut session = match resumed {
        Some(session) => {
            console.say("Loaded previous save.")?;
            show_summary(&mut console, &session.player().summary())?;
            session
        }
        None => match intro(&mut console)? {
            Some(nickname) => Session::new_game(nickname, store, opponents),
            None => return Ok(()),
        },
    };

    main_menu(&mut console, &mut session)
}

fn intro(console: &mut Console) -> Result<Option<String>> {
    console.narrate("......")?;
    console.pause(Duration::from_secs(1));
    console.narrate("You wake up at the entrance of a dark tunnel, your mind blank.")?;
    console.narrate("The sky is dim and the air smells of soil and mystery.")?;
    console.narrate("An elderly man with white hair approaches, holding a strange device.")?;
    console.pause(Duration::from_secs(1));

    console.narrate("???: Hey, are you alright? Who are you?")?;
    let Some(name) = ask_non_empty(console, "You: I... I'm... my name is: ")? else {
        return Ok(None);
    };
    console.narrate(&format!(
        "???: So your name is {name}. Strange... why is there an egg beside you?"
    ))?;
    console.narrate("Professor Oak: Hello, I'm Professor Oak. This is quite a rare egg.")?;
    console.narrate("Professor Oak: Come with me to the lab, let's see what hatches from it.")?;
    console.narrate("You follow him through the grass to his cozy lab.")?;
    console.pause(Duration::from_secs(1));

    console.narrate("He carefully places the egg into an incubator... tick... tick...")?;
    console.pause(Duration::from_secs(2));
    console.narrate("Ding! The egg begins to crack...")?;
    console.narrate("A wet little bug jumps out. It's a Caterpie!")?;
    console.narrate("Professor Oak: Wow, a healthy Caterpie!")?;

    let Some(nickname) = ask_non_empty(console, "What will you name your Caterpie?: ")? else {
        return Ok(None);
    };
    console.narrate(&format!("Professor Oak: I see. So your new partner is {nickname}."))?;
    console.narrate("From here, your grand adventure begins...")?;

    Ok(Some(nickname))
}

fn ask_non_empty(console: &mut Console, prompt: &str) -> Result<Option<String>> {
    loop {
        match console.ask(prompt)? {
            None => return Ok(None),
            Some(answer) if answer.trim().is_empty() => continue,
            Some(answer) => return Ok(Some(answer.trim().to_string())),
        }
    }
}

fn main_menu(console: &mut Console, session: &mut GameSession) -> Result<()> {
    while !session.is_over() {
        if session.finale_due() {
            return finale(console, session);
        }

        let command = match console.ask(MENU_PROMPT)? {
            None => MenuCommand::Quit,
            Some(input) => match input.parse::<MenuCommand>() {
                Ok(command) => command,
                Err(_) => {
                    console.say("Invalid choice.")?;
                    continue;
                }
            },
        };

        match command {
            MenuCommand::Battle => battle(console, session)?,
            MenuCommand::Summary => show_summary(console, &session.player().summary())?,
            MenuCommand::Save => {
                session.save().context("saving game")?;
                console.say("Game saved.")?;
            }
            MenuCommand::Quit => {
                session.save().context("saving game")?;
                console.say("Game saved. Goodbye!")?;
                return Ok(());
            }
        }
    }

    Ok(())
}

fn battle(console: &mut Console, session: &mut GameSession) -> Result<()> {
    let mut encounter = session.start_encounter();
    let wild = encounter.opponent().name().to_string();
    let name = encounter.player().name().to_string();
    console.say(&format!(
        "\nA wild {wild} (Lv {}) appeared!",
        encounter.opponent().level()
    ))?;

    while !encounter.is_over() {
        let Some(input) = console.ask(BATTLE_PROMPT)? else {
            // Closed input retreats rather than leaving the fight hanging.
            encounter.submit_action(Action::Retreat)?;
            break;
        };

        let report = match encounter.submit_input(&input) {
            Ok(report) => report,
            Err(EncounterError::InvalidAction(_)) => {
                console.say("Invalid input. Please choose again.")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        render_turn(
            console,
            &report,
            &name,
            &wild,
            encounter.player().hp(),
            encounter.opponent().hp(),
        )?;
    }

    Ok(())
}

fn render_turn(
    console: &mut Console,
    report: &TurnReport,
    name: &str,
    wild: &str,
    player_hp: u32,
    wild_hp: u32,
) -> Result<()> {
    if let Some(inspection) = &report.inspection {
        show_summary(console, &inspection.player)?;
        console.say(&format!(
            "Opponent: {} (Lv {}) HP: {}/{}",
            inspection.opponent.name,
            inspection.opponent.level,
            inspection.opponent.hp,
            inspection.opponent.max_hp
        ))?;
    }

    if let Some(dealt) = report.damage_dealt {
        console.say(&format!(
            "{name} attacks {wild} and deals {dealt} damage! {wild}'s HP: {wild_hp}"
        ))?;
    }
    if let Some(taken) = report.damage_taken {
        console.say(&format!(
            "{wild} attacks {name} and deals {taken} damage! {name}'s HP: {player_hp}"
        ))?;
    }

    match report.state {
        EncounterState::PlayerWon => {
            console.say(&format!("{wild} has fainted! You won the battle!"))?;
            console.say(&format!("{name} gained {} XP!", report.xp_gained))?;
            if let Some(reached) = &report.level_ups.reached {
                match report.level_ups.count {
                    1 => console.say(&format!("{name} leveled up to {}!", reached.level))?,
                    n => console.say(&format!(
                        "{name} leveled up {n} times, reaching level {}!",
                        reached.level
                    ))?,
                }
                console.say("Stats increased!")?;
                show_summary(console, reached)?;
            }
        }
        EncounterState::PlayerLost => {
            console.say(&format!("{name} has fainted... You've been defeated."))?;
        }
        EncounterState::Retreated => console.say("You ran away safely.")?,
        EncounterState::Ongoing => {}
    }

    Ok(())
}

fn show_summary(console: &mut Console, summary: &CombatantSummary) -> Result<()> {
    console.say(&summary.to_string())?;
    Ok(())
}

fn finale(console: &mut Console, session: &mut GameSession) -> Result<()> {
    let name = session.player().name().to_string();
    console.narrate("\nSuddenly, alarms ring out across the town... Team Rocket is attacking!")?;
    console.narrate("A shadowy figure appears... It's Osaka, the mastermind behind the chaos!")?;
    console.narrate(&format!("He summons {ANTAGONIST_NAME} to destroy the city!"))?;

    let choice = loop {
        match console.ask("\nWill you [F]ight or [R]un?: ")? {
            None => break FinaleChoice::Run,
            Some(input) => match input.parse::<FinaleChoice>() {
                Ok(choice) => break choice,
                Err(_) => console.say("Invalid choice.")?,
            },
        }
    };

    let Some(mut duel) = session.begin_finale(choice) else {
        console.narrate("You chose to run...")?;
        console.narrate(&format!("Your heart filled with fear, {name}'s spirit shatters."))?;
        console.narrate("It reverts to level 5. You live your days as a humble bug catcher.")?;
        return Ok(());
    };

    console.narrate("You chose to fight!")?;
    console.narrate(&format!("{ANTAGONIST_NAME} strikes you down instantly."))?;
    console.pause(Duration::from_secs(1));
    console.narrate(&format!("But wait... {name} begins to glow!"))?;
    console.narrate(&format!("{name} is evolving... into {}!", CHAMPION_NAME.to_uppercase()))?;
    console.narrate(&format!(
        "{} roars, challenging {ANTAGONIST_NAME}!",
        CHAMPION_NAME.to_uppercase()
    ))?;

    let mut interactive = true;
    while duel.outcome().is_none() {
        if interactive && console.ask("\nPress Enter to attack!")?.is_none() {
            interactive = false;
        }
        let Some(ex) = duel.strike() else { break };
        console.say(&format!(
            "{CHAMPION_NAME} deals {} damage! {ANTAGONIST_NAME}'s HP: {}",
            ex.dealt,
            duel.antagonist().hp()
        ))?;
        if let Some(taken) = ex.taken {
            console.say(&format!(
                "{ANTAGONIST_NAME} deals {taken} damage! {CHAMPION_NAME}'s HP: {}",
                duel.champion().hp()
            ))?;
        }
    }

    match duel.outcome() {
        Some(DuelOutcome::ChampionWon) => {
            console.narrate(&format!("{ANTAGONIST_NAME} is defeated! The town is saved!"))?;
            console.narrate("You are hailed as a hero across the region.")?;
        }
        Some(DuelOutcome::AntagonistWon) | None => {
            console.narrate("The battle ends.")?;
            console.narrate(&format!("Even {CHAMPION_NAME} fell... the town is doomed..."))?;
        }
    }

    Ok(())
}
