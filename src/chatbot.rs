// chatbot.rs

/// A canned-response rule: a set of trigger keywords and the reply they
/// select. Keywords must be lowercase, since input is lower-cased before
/// matching.
#[derive(Debug)]
pub struct TopicRule {
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl TopicRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

/// Reply for input that matches no rule.
pub const FALLBACK: &str = "Lo siento, no entendí completamente tu pregunta. \
    ¿Podrías reformularla o ser más específico? Estoy aquí para ayudarte.";

/// Topic rules in evaluation order. Order is significant: the first rule
/// with any keyword contained in the input wins.
pub const RULES: &[TopicRule] = &[
    // Saludos
    TopicRule {
        keywords: &["hola", "buenos días", "buenas tardes", "buenas noches"],
        response: "¡Hola! 👋 ¿En qué puedo ayudarte hoy?",
    },
    // Precios y costos
    TopicRule {
        keywords: &["valor", "precio", "costo", "tarifa", "cuánto cuesta"],
        response: "📊 Nuestros precios son muy competitivos. Contamos con planes \
            desde $9.99 al mes. ¿Te gustaría conocer más detalles sobre algún \
            plan específico?",
    },
    // Información del producto/servicio
    TopicRule {
        keywords: &["producto", "servicio", "que ofrecen", "cómo funciona"],
        response: "🛍️ Ofrecemos una amplia gama de servicios, incluyendo atención \
            al cliente, análisis de datos y automatización de marketing. ¿Hay \
            algún servicio específico que te interese?",
    },
    // Atención al cliente
    TopicRule {
        keywords: &[
            "contacto", "contactar", "teléfono", "correo", "email", "datos",
            "llamar",
        ],
        response: "📞 Puedes contactarnos al teléfono 555-123-4567 o enviarnos un \
            correo a contacto@empresa.com. Nuestro horario de atención es de \
            9:00 a 18:00 de lunes a viernes.",
    },
    // Soporte técnico
    TopicRule {
        keywords: &["problema", "error", "falla", "no funciona"],
        response: "🔧 Lamento escuchar eso. Para brindarte un mejor soporte \
            técnico, ¿podrías describir el problema con más detalle?",
    },
    // Horarios
    TopicRule {
        keywords: &["horario", "abierto", "cerrado", "horas"],
        response: "🕒 Nuestro horario de atención es de lunes a viernes de 9:00 a \
            18:00 y sábados de 10:00 a 14:00. Domingos cerrado.",
    },
    // Ubicación
    TopicRule {
        keywords: &["donde", "ubicación", "dirección", "como llegar", "dónde"],
        response: "📍 Nos encontramos ubicados en Av. Principal #123, Col. Centro. \
            Puedes encontrarnos fácilmente en Google Maps buscando \"Empresa\".",
    },
    // Promociones
    TopicRule {
        keywords: &["descuento", "promoción", "oferta"],
        response: "🎉 ¡Tenemos grandes promociones este mes! 30% de descuento en \
            todos nuestros servicios para nuevos clientes y 15% para clientes \
            actuales que renueven su suscripción.",
    },
    // Agradecimientos
    TopicRule {
        keywords: &["gracias", "thank", "te agradezco"],
        response: "😊 ¡De nada! Ha sido un placer ayudarte. Si tienes más \
            preguntas, no dudes en consultar.",
    },
    // Despedida
    TopicRule {
        keywords: &["adiós", "hasta luego", "bye"],
        response: "👋 ¡Hasta pronto! Que tengas un excelente día.",
    },
];

/// Picks the canned reply for a user message.
///
/// Total over all strings: lower-cases the input, walks `RULES` in order and
/// returns the first match, falling back to `FALLBACK` when nothing matches.
pub fn classify(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.response)
        .unwrap_or(FALLBACK)
}
