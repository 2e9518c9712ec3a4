//! Static page content for both variants.
//!
//! Only what drives choreography and layout is kept: how many cards a grid has, the labels that
//! show up in logs, and the texts the timers type out.

use crate::site::Variant;

/// Navigation entry pointing at a section anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

/// Card with a title and a short description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

/// Numbered process step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ProcessStep {
    pub num: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Patient testimonial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Testimonial {
    pub author: &'static str,
    pub context: &'static str,
    pub stars: u8,
}

/// Headline figure in the stats strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Everything a variant renders, as static literals.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct SiteContent {
    pub variant: Variant,
    pub nav: &'static [NavLink],
    pub hero_lines: &'static [&'static str],
    pub hero_actions: &'static [&'static str],
    pub credentials: &'static [Card],
    pub stats: &'static [Stat],
    pub specialties: &'static [Card],
    pub conditions: &'static [&'static str],
    pub philosophy: &'static [&'static str],
    pub contrasts: &'static [Card],
    pub process: &'static [ProcessStep],
    pub testimonials: &'static [Testimonial],
    /// Blocks revealed in the contact / call-to-action section.
    pub contact_blocks: &'static [&'static str],
    /// Text typed by the second feature card.
    pub typewriter: &'static str,
    /// Column labels of the scheduling card.
    pub weekdays: &'static [&'static str],
    /// Message shown after a contact form submission.
    pub acknowledgment: &'static str,
}

impl SiteContent {
    /// Content of `variant`.
    pub fn for_variant(variant: Variant) -> &'static SiteContent {
        match variant {
            Variant::Clinic => &CLINIC,
            Variant::Noir => &NOIR,
        }
    }
}

const CLINIC_NAV: &[NavLink] = &[
    NavLink { label: "Sobre", anchor: "sobre" },
    NavLink { label: "Especialidades", anchor: "especialidades" },
    NavLink { label: "Abordagem", anchor: "abordagem" },
    NavLink { label: "Depoimentos", anchor: "depoimentos" },
    NavLink { label: "Contato", anchor: "contato" },
];

const NOIR_NAV: &[NavLink] = &[
    NavLink { label: "Sobre", anchor: "about" },
    NavLink { label: "Tratamentos", anchor: "tratamentos" },
    NavLink { label: "Protocolo", anchor: "protocolo" },
    NavLink { label: "Depoimentos", anchor: "depoimentos" },
    NavLink { label: "Contato", anchor: "contato" },
];

static CLINIC: SiteContent = SiteContent {
    variant: Variant::Clinic,
    nav: CLINIC_NAV,
    hero_lines: &["Psicanálise que", "resolve.", "Não apenas alivia."],
    hero_actions: &["Agendar Consulta", "Conhecer o doutor"],
    credentials: &[
        Card { title: "Graduação em Medicina", description: "UEG, atual UERJ" },
        Card {
            title: "Formação em Psicanálise",
            description: "Soc. Bras. de Psicoterapia e Psicanálise, 1987",
        },
        Card {
            title: "Especialista em Psiquiatria",
            description: "CRM RJ 156481 · RQE 28107 · 2008",
        },
        Card { title: "Especialista em Psicoterapia", description: "2011" },
    ],
    stats: &[],
    specialties: &[
        Card {
            title: "Psicanálise Breve",
            description: "Abordagem focal que identifica o núcleo emocional do conflito através da interpretação de sonhos.",
        },
        Card {
            title: "Psiquiatria de Adultos",
            description: "Diagnóstico e tratamento de transtornos do humor, ansiedade, fobias, pânico e TOC.",
        },
        Card {
            title: "Psicoterapia Individual e de Casal",
            description: "Espaço seguro para elaboração de conflitos relacionais e individuais.",
        },
        Card {
            title: "Tratamento Combinado",
            description: "Psicoterapia e medicação se complementam quando necessário.",
        },
        Card {
            title: "Análise Junguiana e Transpessoal",
            description: "Trabalho com o inconsciente coletivo, arquétipos e dimensões espirituais do psiquismo.",
        },
        Card {
            title: "Telemedicina",
            description: "Consultas por vídeo para todo o Brasil e para brasileiros no exterior.",
        },
    ],
    conditions: &[
        "Ansiedade Generalizada",
        "Depressão",
        "Síndrome do Pânico",
        "Fobias",
        "TOC (Transtorno Obsessivo-Compulsivo)",
        "Transtornos de Humor",
        "Estresse e Burnout",
        "Disfunção Sexual Psicogênica",
        "Dificuldades nos Relacionamentos",
        "Orientação Parental",
    ],
    philosophy: &["A psicanálise breve não encurta o caminho: ela vai direto ao ponto."],
    contrasts: &[
        Card {
            title: "Não dependência de medicamentos.",
            description: "A cura como caminho, o remédio como apoio temporário.",
        },
        Card {
            title: "Não tratar sintomas indefinidamente.",
            description: "Chegar à raiz emocional e resolver.",
        },
        Card {
            title: "Não análise interminável.",
            description: "Psicanálise breve com resultado mensurável.",
        },
        Card {
            title: "Não escuta passiva.",
            description: "Interpretação ativa de sonhos e padrões inconscientes.",
        },
    ],
    process: &[
        ProcessStep {
            num: "01",
            title: "Primeira Consulta",
            description: "Escuta ativa e sem julgamentos para mapear o histórico emocional.",
        },
        ProcessStep {
            num: "02",
            title: "Avaliação e Diagnóstico",
            description: "Identificação dos padrões inconscientes que alimentam o sofrimento.",
        },
        ProcessStep {
            num: "03",
            title: "Plano Terapêutico",
            description: "Definição da abordagem mais adequada para cada paciente.",
        },
        ProcessStep {
            num: "04",
            title: "Trabalho Analítico",
            description: "Sessões semanais inicialmente, com progressão para encontros mensais.",
        },
        ProcessStep {
            num: "05",
            title: "Alta e Continuidade",
            description: "O objetivo é a resolução, não a dependência.",
        },
    ],
    testimonials: &[
        Testimonial { author: "Mariana S.", context: "Rio de Janeiro, RJ", stars: 5 },
        Testimonial {
            author: "Ricardo F.",
            context: "São Paulo, SP (Telemedicina)",
            stars: 5,
        },
        Testimonial {
            author: "Alessandra M.",
            context: "Lisboa, Portugal (Telemedicina)",
            stars: 5,
        },
        Testimonial { author: "Carlos H.", context: "Rio de Janeiro, RJ", stars: 5 },
    ],
    contact_blocks: &["heading", "intro", "channels", "telemedicine", "form"],
    typewriter: "",
    weekdays: &[],
    acknowledgment: "Mensagem enviada! O Dr. Décio entrará em contato em breve.",
};

static NOIR: SiteContent = SiteContent {
    variant: Variant::Noir,
    nav: NOIR_NAV,
    hero_lines: &["Psicanálise breve", "com interpretação", "de sonhos"],
    hero_actions: &["Agende sua consulta", "Teleconsulta disponível"],
    credentials: &[
        Card { title: "Formação", description: "Medicina, UERJ · Psicanálise, SBPP, 1987" },
        Card {
            title: "Especialidades",
            description: "Psiquiatria, AMB/ABP, 2008 · Psicoterapia, AMB/ABP, 2011",
        },
        Card { title: "Registro", description: "CRM RJ: 156481 · RQE Nº: 28107" },
    ],
    stats: &[
        Stat { value: "500+", label: "Avaliações de pacientes" },
        Stat { value: "82+", label: "Perguntas respondidas" },
        Stat { value: "37+", label: "Anos de experiência" },
        Stat { value: "CRM RJ 156481", label: "Psiquiatra RQE 28107" },
    ],
    specialties: &[
        Card {
            title: "Psicanálise Breve com Interpretação de Sonhos",
            description: "Método estruturado que utiliza a análise dos sonhos como ferramenta terapêutica.",
        },
        Card {
            title: "Tratamento Dual (Psicoterapia + Medicação)",
            description: "Abordagem integrada: o mesmo profissional conduz e prescreve.",
        },
        Card {
            title: "Teleconsulta para Todo Brasil e Exterior",
            description: "Atendimento online com a mesma qualidade e sigilo do presencial.",
        },
    ],
    conditions: &[
        "Transtornos De Estresse",
        "Transtornos de Ansiedade Generalizados",
        "Transtorno Depressivo",
        "Transtornos Fóbicos",
        "Transtornos Do Humor",
        "Depressão",
        "Transtorno Da Personalidade Obsessivo-compulsiva",
        "Transtorno De Pânico",
        "Disfunções sexuais psicogênicas",
        "Transtorno da Ansiedade",
        "Dificuldades no relacionamento",
        "Alterações do humor",
        "Insônia",
    ],
    philosophy: &[
        "A mente não é um lugar a ser conquistado, mas um território a ser compreendido.",
        "",
        "Médico psicanalista, psicoterapeuta e psiquiatra especialista em adultos.",
    ],
    contrasts: &[],
    process: &[
        ProcessStep {
            num: "01",
            title: "Avaliação Inicial",
            description: "Entendimento profundo do histórico, sintomas e objetivos terapêuticos.",
        },
        ProcessStep {
            num: "02",
            title: "Plano Personalizado",
            description: "Estratégia integrada baseada nas necessidades específicas.",
        },
        ProcessStep {
            num: "03",
            title: "Transformação",
            description: "Trabalho terapêutico consistente com acompanhamento contínuo e ajustes.",
        },
    ],
    testimonials: &[
        Testimonial { author: "Paciente", context: "Tratamento para ansiedade", stars: 5 },
        Testimonial { author: "Araci e Ranonzinho", context: "Pacientes", stars: 5 },
        Testimonial { author: "Paciente", context: "Tratamento depressivo", stars: 5 },
        Testimonial { author: "Paciente", context: "Tratamento de estresse", stars: 5 },
        Testimonial { author: "Paciente", context: "Tratamento combinado", stars: 5 },
        Testimonial { author: "Paciente", context: "Terapia psicanalítica", stars: 5 },
    ],
    contact_blocks: &["eyebrow", "heading", "intro", "pricing", "actions", "details"],
    typewriter: "Analisando padrões de sonho... Processando memórias inconscientes... Decodificando símbolos...",
    weekdays: &["S", "T", "Q", "Q", "S", "S", "D"],
    acknowledgment: "",
};

#[cfg(test)]
#[path = "../../tests/unit/site/content.rs"]
mod tests;
