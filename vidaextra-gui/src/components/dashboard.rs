use iced::{
    Center, Color, Element, Fill,
    widget::{Column, button, column, container, row, scrollable, space, text},
};
use vidaextra_lib::{
    Goal, Profile, format,
    session::UserAction,
    stats::{Stats, Toxin, ToxinLoad},
};

const LOSS: Color = Color::from_rgb8(0xD3, 0x2F, 0x2F);
const GAIN: Color = Color::from_rgb8(0x2E, 0x7D, 0x32);
const TOXIC: Color = Color::from_rgb8(0xFF, 0xCC, 0x80);

#[derive(Debug, Clone)]
pub enum Message {
    ActionPressed(UserAction),
}

pub enum Action {
    /// Carry out this action on the stored profile
    Apply(UserAction),
}

/// Wording of the dashboard for each goal
struct Labels {
    title: &'static str,
    counter: &'static str,
    summary: &'static str,
    money: &'static str,
    time: &'static str,
    equivalent: &'static str,
    toxins: &'static str,
    toxins_caption: &'static str,
    add_unit: &'static str,
    add_pack: &'static str,
    accent: Color,
}

const TRACKING: Labels = Labels {
    title: "REGISTRO DE CONSUMO",
    counter: "Cigarros consumidos",
    summary: "PÉRDIDAS",
    money: "Dinero quemado:",
    time: "Vida perdida:",
    equivalent: "HAS GASTADO LO EQUIVALENTE A:",
    toxins: "TÓXICOS EN TU CUERPO",
    toxins_caption: "Acumulado en pulmones y sangre",
    add_unit: "+1 CIGARRO",
    add_pack: "+1 PAQUETE",
    accent: LOSS,
};

const QUITTING: Labels = Labels {
    title: "REGISTRO DE PROGRESO",
    counter: "Tentaciones superadas",
    summary: "BENEFICIOS",
    money: "Dinero ahorrado:",
    time: "Vida salvada:",
    equivalent: "HAS AHORRADO LO EQUIVALENTE A:",
    toxins: "TÓXICOS EVITADOS",
    toxins_caption: "Sustancias no ingresadas al organismo",
    add_unit: "-1 CIGARRO",
    add_pack: "-1 PAQUETE",
    accent: GAIN,
};

pub struct Dashboard {
    profile: Profile,
    stats: Stats,
    currency: String,
}

impl Dashboard {
    pub fn new(profile: Profile, currency: String) -> Self {
        Self {
            stats: Stats::new(&profile),
            profile,
            currency,
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::ActionPressed(action) => Action::Apply(action),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let labels = match self.profile.goal {
            Goal::Tracking => &TRACKING,
            Goal::Quitting => &QUITTING,
        };
        let stats = &self.stats;

        let packs = match self.profile.goal {
            Goal::Tracking => format!(
                "({} paquetes y {} cigarros)",
                stats.full_packs(),
                stats.remainder()
            ),
            Goal::Quitting => format!("({} paquetes no comprados)", stats.full_packs()),
        };

        let summary = container(
            column![
                text(labels.summary).color(labels.accent),
                line(labels.money, format::money(stats.money(), &self.currency)),
                line(labels.time, format::time(stats.time_minutes())),
                text(labels.equivalent),
                text(format::cost_phrase(stats.money())),
            ]
            .spacing(8),
        )
        .padding(20)
        .width(Fill)
        .style(container::rounded_box);

        let toxins = container(
            column![
                text(labels.toxins).color(labels.accent),
                text(labels.toxins_caption).size(12),
                Column::with_children(stats.toxins().map(|load| self.toxin_row(load))).spacing(6),
            ]
            .spacing(8),
        )
        .padding(20)
        .width(Fill)
        .style(container::rounded_box);

        scrollable(
            column![
                text(labels.title).size(20).color(labels.accent),
                text(format!("Nombre: {}", self.profile.name)).size(14),
                text(format!("Edad: {} años", self.profile.age)).size(14),
                text(stats.count().to_string()).size(64),
                text(labels.counter),
                text(packs),
                summary,
                toxins,
                row![
                    button(text(labels.add_unit))
                        .width(Fill)
                        .on_press(Message::ActionPressed(UserAction::AddUnit)),
                    button(text(labels.add_pack))
                        .width(Fill)
                        .on_press(Message::ActionPressed(UserAction::AddPack)),
                ]
                .spacing(10),
                button(text("Reiniciar / Cambiar objetivo"))
                    .style(button::text)
                    .on_press(Message::ActionPressed(UserAction::Reset)),
            ]
            .spacing(12)
            .padding(20)
            .align_x(Center),
        )
        .into()
    }

    fn toxin_row(&self, load: ToxinLoad) -> Element<'_, Message> {
        row![
            text(toxin_label(self.profile.goal, load.toxin())),
            space::horizontal(),
            text(format::mass(load.milligrams())).color(TOXIC),
        ]
        .into()
    }
}

fn line<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    row![text(label), space::horizontal(), text(value)].into()
}

/// Where each substance ends up, or that it was kept out
fn toxin_label(goal: Goal, toxin: Toxin) -> String {
    let note = match (goal, toxin) {
        (Goal::Tracking, Toxin::Tar) => "Pulmones",
        (Goal::Tracking, Toxin::CarbonMonoxide) => "Sangre",
        (Goal::Tracking, Toxin::Nicotine) => "Cerebro",
        (Goal::Quitting, Toxin::Tar | Toxin::CarbonMonoxide) => "Evitado",
        (Goal::Quitting, Toxin::Nicotine) => "Evitada",
    };

    format!("{toxin} ({note})")
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;
    use vidaextra_lib::{Goal, Profile, session::UserAction, stats::Toxin};

    use super::{Action, Dashboard, Message, toxin_label};

    #[test]
    fn test_buttons_forward_the_action() {
        let profile = Profile::new("Ana", 30, 5.0, 20, Goal::Tracking).with_active_count(3);
        let mut dashboard = Dashboard::new(profile, "€".into());

        // Pressed twice before the store answers, both presses go through untouched
        for _ in 0..2 {
            let action = dashboard.update(Message::ActionPressed(UserAction::AddUnit));
            assert!(matches!(action, Action::Apply(UserAction::AddUnit)));
        }

        let action = dashboard.update(Message::ActionPressed(UserAction::Reset));
        assert!(matches!(action, Action::Apply(UserAction::Reset)));
    }

    #[test]
    fn test_toxin_labels() {
        let label = |goal| Toxin::iter().map(|t| toxin_label(goal, t)).collect::<Vec<_>>();

        assert_eq!(
            label(Goal::Tracking),
            [
                "Alquitrán (Pulmones)",
                "Monóxido Carbono (Sangre)",
                "Nicotina (Cerebro)"
            ]
        );
        assert_eq!(
            label(Goal::Quitting),
            [
                "Alquitrán (Evitado)",
                "Monóxido Carbono (Evitado)",
                "Nicotina (Evitada)"
            ]
        );
    }
}
