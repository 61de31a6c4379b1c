//! User message templates for the coaching commentary requests

use slayer_prompt::{JinjaTemplate, Result};

/// Create the per-chart commentary user message template
///
/// Used once per chart; `has_image` is true when the rendered chart image is
/// attached to the same request.
pub fn chart_commentary() -> Result<JinjaTemplate> {
    JinjaTemplate::bilingual(
        "stats.user.chart_commentary",
        "Here is the '{{ title }}' chart from my training dashboard\
{% if has_image %} (the rendered chart image is attached){% endif %}: {{ description }}. \
Comment on the trend you see in this chart and give one concrete tip to improve it.",
        "Esta es la gráfica '{{ title }}' de mi panel de entrenamiento\
{% if has_image %} (la imagen de la gráfica va adjunta){% endif %}: {{ description }}. \
Comenta la tendencia que ves en esta gráfica y dame un consejo concreto para mejorarla.",
    )
}

/// Create the holistic analysis user message template
///
/// One request covering the full data table and every chart; the enumerated
/// tasks are answered in order in a single narrative.
pub fn holistic_analysis() -> Result<JinjaTemplate> {
    JinjaTemplate::bilingual(
        "stats.user.holistic_analysis",
        r"Below are my full bot-training results and the charts shown on my dashboard.

## Data
{{ data_table }}

## Charts
{{ charts }}

Please cover, in order:
1. A general analysis of how the training is going.
2. Average stats over periods of sessions and how they shifted.
3. The best and worst sessions and what set them apart.
4. Concrete tips to improve the weakest stats.
5. Any correlations you see between the stats.
6. What the numbers suggest about my play style.
7. What to focus on in the next training sessions.",
        r"A continuación están todos mis resultados de entrenamiento contra bots y las gráficas de mi panel.

## Datos
{{ data_table }}

## Gráficas
{{ charts }}

Por favor cubre, en orden:
1. Un análisis general de cómo va el entrenamiento.
2. Los promedios por períodos de sesiones y cómo han cambiado.
3. Las mejores y peores sesiones y qué las distingue.
4. Consejos concretos para mejorar las estadísticas más débiles.
5. Las correlaciones que veas entre las estadísticas.
6. Qué sugieren los números sobre mi estilo de juego.
7. En qué enfocarme en las próximas sesiones de entrenamiento.",
    )
}
