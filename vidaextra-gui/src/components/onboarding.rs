use iced::{
    Center, Element, Fill,
    widget::{button, column, container, text, text_input},
};
use vidaextra_lib::{Goal, Profile, onboarding::ProfileForm};

#[derive(Debug, Clone)]
pub enum Message {
    NameInput(String),
    AgeInput(String),
    PriceInput(String),
    UnitsInput(String),
    GoalPressed(Goal),
}

pub enum Action {
    None,
    Create(Profile),
}

/// First-run form that collects the profile
pub struct Onboarding {
    form: ProfileForm,
}

impl Onboarding {
    pub fn new() -> Self {
        Self {
            form: ProfileForm::new(),
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::NameInput(content) => self.form.name = content,
            Message::AgeInput(content) => self.form.age = content,
            Message::PriceInput(content) => self.form.price_per_pack = content,
            Message::UnitsInput(content) => self.form.units_per_pack = content,
            Message::GoalPressed(goal) => {
                return self
                    .form
                    .submit(goal)
                    .map_or(Action::None, Action::Create);
            }
        }

        Action::None
    }

    pub fn view(&self) -> Element<'_, Message> {
        let valid = self.form.validate();

        container(
            column![
                text("Bienvenido a VidaExtra").size(28),
                text("El paso más importante ya lo has dado."),
                text("Introduce tus datos").size(20),
                text_input("Nombre", &self.form.name).on_input(Message::NameInput),
                text_input("Edad (años)", &self.form.age).on_input(Message::AgeInput),
                text_input("Precio por paquete", &self.form.price_per_pack)
                    .on_input(Message::PriceInput),
                text_input("Cigarros por paquete", &self.form.units_per_pack)
                    .on_input(Message::UnitsInput),
                text("¿Cuál es tu objetivo?"),
                button(text("Controlar lo que fumo").size(18))
                    .width(Fill)
                    .on_press_maybe(valid.then_some(Message::GoalPressed(Goal::Tracking))),
                button(text("Dejar de fumar").size(18))
                    .width(Fill)
                    .style(button::success)
                    .on_press_maybe(valid.then_some(Message::GoalPressed(Goal::Quitting))),
            ]
            .spacing(12)
            .align_x(Center)
            .max_width(420),
        )
        .padding(20)
        .center_x(Fill)
        .into()
    }
}
