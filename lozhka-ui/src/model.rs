use serde::Serialize;

/// Название сервиса в навигации и заголовках.
pub const BRAND_NAME: &str = "Ложка";

/// Заголовок главной страницы.
pub const HOME_HEADLINE: &str = "Добро пожаловать в Ложку";

/// Подзаголовок главной страницы.
pub const HOME_SUBHEADLINE: &str = "Ваш умный ассистент для решения повседневных задач";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Как оформлять ссылку в навигации.
pub enum LinkEmphasis {
    /// Обычная текстовая ссылка.
    Plain,
    /// Кнопка основного действия.
    Primary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Ссылка навигации: подпись и целевой путь.
pub struct NavLink {
    /// Текст ссылки.
    pub label: &'static str,
    /// Целевой путь, например `/login`.
    pub href: &'static str,
    /// Оформление ссылки.
    pub emphasis: LinkEmphasis,
}

impl NavLink {
    /// Возвращает CSS-классы для оформления ссылки.
    pub fn class(&self) -> &'static str {
        match self.emphasis {
            LinkEmphasis::Plain => "text-gray-700 hover:text-gray-900",
            LinkEmphasis::Primary => {
                "bg-blue-500 text-white px-4 py-2 rounded-md hover:bg-blue-600"
            }
        }
    }
}

/// Ссылка на главную с названием сервиса.
pub const BRAND_LINK: NavLink = NavLink {
    label: BRAND_NAME,
    href: "/",
    emphasis: LinkEmphasis::Plain,
};

/// Ссылки в правой части навигации, в порядке вывода.
pub const AUX_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Войти",
        href: "/login",
        emphasis: LinkEmphasis::Plain,
    },
    NavLink {
        label: "Регистрация",
        href: "/register",
        emphasis: LinkEmphasis::Primary,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Карточка возможности на главной странице.
pub struct FeatureCard {
    /// Заголовок карточки.
    pub title: &'static str,
    /// Короткое описание.
    pub description: &'static str,
}

/// Карточки главной страницы, в порядке вывода.
pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title: "Общение",
        description: "Интеллектуальный собеседник для любых тем",
    },
    FeatureCard {
        title: "Творчество",
        description: "Создание изображений и обработка контента",
    },
    FeatureCard {
        title: "Анализ",
        description: "Работа с документами и данными",
    },
];
