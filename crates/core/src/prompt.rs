//! Prompt construction for every generation kind.
//!
//! All prompts are Portuguese instructions assembled from structured
//! request fields. They ask for a specific output shape (a JSON array for
//! posts, a JSON object for landing pages, free text for media
//! descriptions); parsing of the reply lives in [`crate::extract`] and
//! [`crate::fallback`].

use crate::request::{
    GenerateImageRequest, GenerateLandingRequest, GeneratePostsRequest, GenerateVideoRequest,
};

/// Instruction asking the model for the full batch of 10 posts as JSON.
pub fn posts_prompt(req: &GeneratePostsRequest) -> String {
    format!(
        r#"Gere 10 posts para redes sociais sobre o assunto "{subject}".

Especificações:
- Tom: {tone}
- Público-alvo: {audience}
- Objetivo: {goal}

Para cada post, forneça:
1. Título curto e impactante (máximo 60 caracteres)
2. Legenda envolvente (1-2 parágrafos, máximo 280 caracteres)
3. 5 hashtags relevantes e estratégicas
4. Sugestão de call-to-action
5. Tipo de mídia sugerida (imagem, vídeo, carrossel)

Formato de resposta: JSON array com objetos contendo:
{{
  "title": "string",
  "content": "string",
  "hashtags": ["string"],
  "cta": "string",
  "mediaType": "string",
  "magicPrompt": "string"
}}

Certifique-se de que:
- Cada post seja único e envolvente
- O conteúdo seja otimizado para engajamento
- As hashtags sejam relevantes e populares
- Os CTAs sejam claros e acionáveis
- Os magic prompts sejam detalhados para geração de mídia"#,
        subject = req.subject,
        tone = req.tone,
        audience = req.audience,
        goal = req.goal,
    )
}

/// Elaborated technical prompt for image description generation.
pub fn image_prompt(req: &GenerateImageRequest) -> String {
    let reference = req
        .reference_image_url
        .as_deref()
        .map(|url| format!("Referência visual: {url}\n"))
        .unwrap_or_default();

    format!(
        r#"Crie uma imagem profissional com as seguintes especificações:

Prompt base: {prompt}
Paleta de cores: {palette}
Atributos de estilo: {attributes}
Formato: {resolution}
{reference}
Requisitos técnicos:
- Alta qualidade, resolução adequada para redes sociais
- Composição profissional seguindo regra dos terços
- Iluminação equilibrada e natural
- Cores vibrantes e contrastantes
- Elementos visuais bem distribuídos
- Espaço adequado para texto/logo se necessário

Estilo: moderno, profissional, visualmente impactante"#,
        prompt = req.prompt,
        palette = req.palette.as_str(),
        attributes = req.attributes.join(", "),
        resolution = req.format.resolution(),
    )
}

/// Elaborated technical prompt for video script generation.
pub fn video_prompt(req: &GenerateVideoRequest) -> String {
    format!(
        r#"Crie um vídeo profissional com as seguintes especificações:

Brief: {brief}
Prompt: {prompt}
Duração: {duration}
Estilo: {style}

Especificações técnicas:
- Resolução: 1080x1920 (vertical para redes sociais)
- Frame rate: 30fps
- Formato: MP4
- Qualidade: HD

Elementos visuais:
- Transições suaves e profissionais
- Movimento de câmera dinâmico
- Cores vibrantes e bem balanceadas
- Composição cinematográfica
- Ritmo adequado para a duração especificada

Audio:
- Música de fundo apropriada
- Sound design profissional
- Níveis de áudio balanceados

Call-to-action:
- Texto overlay nos momentos apropriados
- Timing otimizado para engagement
- Design integrado ao estilo visual"#,
        brief = req.brief,
        prompt = req.prompt,
        duration = req.duration.as_str(),
        style = req.style,
    )
}

/// Instruction asking the model for landing page content as a JSON object.
pub fn landing_prompt(req: &GenerateLandingRequest) -> String {
    format!(
        r#"Gere uma landing page completa para:

Briefing: {briefing}
Tipo de negócio: {business_type}
Público-alvo: {target_audience}
Objetivo principal: {main_goal}

Forneça:
1. Headline principal (impactante, máximo 60 caracteres)
2. Subheadline (explicativa, máximo 120 caracteres)
3. 5 bullets com benefícios claros
4. CTA principal otimizado para {main_goal}
5. HTML completo responsivo e moderno
6. Sugestões de cores e tipografia

Formato JSON:
{{
  "headline": "string",
  "subheadline": "string",
  "bullets": ["string"],
  "cta": "string",
  "html": "string completo",
  "designSuggestions": {{
    "colors": ["primary", "secondary"],
    "typography": "font suggestion"
  }}
}}

O HTML deve ser:
- Responsivo (mobile-first)
- Moderno e profissional
- Otimizado para conversão
- Incluir formulário de contato
- Com estilos CSS embedded"#,
        briefing = req.briefing,
        business_type = req.business_type,
        target_audience = req.target_audience,
        main_goal = req.main_goal.as_str(),
    )
}

/// Enrich a post's magic prompt with the session's subject, tone, and
/// audience before it is sent to image or video generation.
pub fn enrich_magic_prompt(
    base: &str,
    subject: &str,
    title: &str,
    tone: &str,
    audience: &str,
) -> String {
    let audience = if audience.trim().is_empty() {
        "geral"
    } else {
        audience
    };
    format!(
        r#"{base}

Elementos específicos:
- Foco em {subject}
- Paleta de cores: azul, verde, branco
- Estilo: moderno, profissional, clean
- Composição: regra dos terços
- Texto: "{title}" integrado
- Resolução: 1080x1080 (Instagram)
- Mood: inspirador, confiável, inovador
- Tom: {tone}
- Público: {audience}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{ImageFormat, LandingGoal, Palette, VideoDuration};

    fn posts_req() -> GeneratePostsRequest {
        serde_json::from_str(
            r#"{"subject":"Sustentabilidade","tone":"inspirador","audience":"empresários","goal":"leads"}"#,
        )
        .unwrap()
    }

    #[test]
    fn posts_prompt_embeds_request_fields() {
        let prompt = posts_prompt(&posts_req());
        assert!(prompt.contains("\"Sustentabilidade\""));
        assert!(prompt.contains("Tom: inspirador"));
        assert!(prompt.contains("Público-alvo: empresários"));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn image_prompt_maps_format_to_resolution() {
        let req = GenerateImageRequest {
            prompt: "logo".into(),
            palette: Palette::Dark,
            attributes: vec!["modern".into(), "clean".into()],
            format: ImageFormat::Landscape,
            reference_image_url: None,
        };
        let prompt = image_prompt(&req);
        assert!(prompt.contains("Formato: 1920x1080"));
        assert!(prompt.contains("Paleta de cores: dark"));
        assert!(prompt.contains("modern, clean"));
        assert!(!prompt.contains("Referência visual"));
    }

    #[test]
    fn image_prompt_includes_reference_when_present() {
        let req = GenerateImageRequest {
            prompt: "logo".into(),
            palette: Palette::Warm,
            attributes: vec![],
            format: ImageFormat::Square,
            reference_image_url: Some("https://example.com/ref.png".into()),
        };
        assert!(image_prompt(&req).contains("Referência visual: https://example.com/ref.png"));
    }

    #[test]
    fn video_prompt_embeds_duration_and_style() {
        let req = GenerateVideoRequest {
            prompt: "lançamento".into(),
            duration: VideoDuration::Secs60,
            style: "dynamic".into(),
            brief: "novo produto".into(),
        };
        let prompt = video_prompt(&req);
        assert!(prompt.contains("Duração: 60s"));
        assert!(prompt.contains("Estilo: dynamic"));
        assert!(prompt.contains("Brief: novo produto"));
    }

    #[test]
    fn landing_prompt_embeds_goal_twice() {
        let req = GenerateLandingRequest {
            briefing: "consultoria".into(),
            business_type: "SaaS".into(),
            target_audience: "PMEs".into(),
            main_goal: LandingGoal::Sales,
        };
        let prompt = landing_prompt(&req);
        assert_eq!(prompt.matches("sales").count(), 2);
        assert!(prompt.contains("Tipo de negócio: SaaS"));
    }

    #[test]
    fn magic_prompt_enrichment_defaults_empty_audience() {
        let enriched = enrich_magic_prompt("base", "IA", "Título", "casual", "  ");
        assert!(enriched.starts_with("base\n"));
        assert!(enriched.contains("- Público: geral"));
        assert!(enriched.contains("Texto: \"Título\" integrado"));
    }
}
