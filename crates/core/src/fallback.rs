//! The parse-or-fallback pipeline for structured model replies.
//!
//! Parse failures never surface to callers. Identical request fields
//! produce identical fallback content, which is what keeps the contract
//! testable: the fallback is an explicit second step, not an
//! exception-handler afterthought.

use crate::artifact::{DesignSuggestions, LandingPage};
use crate::extract;
use crate::post::{ModelPost, Post, PostStatus};
use crate::request::{GenerateLandingRequest, GeneratePostsRequest, LandingGoal};

/// Number of posts every generation response carries, model-derived or
/// synthetic. Partial batches are never returned.
pub const POSTS_PER_BATCH: usize = 10;

/// Media type cycle applied by index when synthesizing posts.
const MEDIA_CYCLE: [&str; 3] = ["image", "video", "carousel"];

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

/// Shape a raw model reply into the guaranteed batch: the model's JSON
/// when it parses into a full batch of well-formed posts, the
/// deterministic fallback otherwise. Ids are left empty either way; the
/// handler assigns fresh ones.
pub fn posts_from_response(response: &str, req: &GeneratePostsRequest) -> Vec<Post> {
    parsed_posts(response).unwrap_or_else(|| fallback_posts(req))
}

/// Attempt the structured parse: first JSON array in the reply, at least
/// [`POSTS_PER_BATCH`] entries whose leading batch is well-formed,
/// truncated to the batch size.
fn parsed_posts(response: &str) -> Option<Vec<Post>> {
    let raw: Vec<ModelPost> = extract::parse_embedded_array(response)?;
    if raw.len() < POSTS_PER_BATCH {
        return None;
    }
    if !raw.iter().take(POSTS_PER_BATCH).all(ModelPost::is_well_formed) {
        return None;
    }
    Some(
        raw.into_iter()
            .take(POSTS_PER_BATCH)
            .map(ModelPost::into_post)
            .collect(),
    )
}

/// Synthesize the full batch of placeholder posts from request fields alone.
pub fn fallback_posts(req: &GeneratePostsRequest) -> Vec<Post> {
    (0..POSTS_PER_BATCH).map(|i| fallback_post(req, i)).collect()
}

fn fallback_post(req: &GeneratePostsRequest, index: usize) -> Post {
    let subject_tag: String = req.subject.split_whitespace().collect();
    let media_kind = if index % 2 == 0 { "imagem" } else { "vídeo" };

    Post {
        id: String::new(),
        title: format!("{} - Post {}", req.subject, index + 1),
        content: format!(
            "Conteúdo envolvente sobre {}. Este post foi gerado automaticamente com IA para maximizar o engajamento com {}.",
            req.subject, req.audience
        ),
        hashtags: vec![
            format!("#{subject_tag}"),
            "#marketing".to_string(),
            "#digitalmarketing".to_string(),
            "#ia".to_string(),
            "#conteudo".to_string(),
        ],
        cta: Some(posts_goal_cta(&req.goal).to_string()),
        media_type: Some(MEDIA_CYCLE[index % MEDIA_CYCLE.len()].to_string()),
        magic_prompt: Some(format!(
            "Crie uma {media_kind} profissional sobre {} para {} com tom {}. Estilo moderno, cores vibrantes, alta qualidade.",
            req.subject, req.audience, req.tone
        )),
        image_url: None,
        video_url: None,
        status: PostStatus::Generated,
    }
}

/// CTA wording for synthesized posts, keyed by the request goal.
pub fn posts_goal_cta(goal: &str) -> &'static str {
    match goal {
        "leads" => "Saiba mais",
        "sales" => "Compre agora",
        _ => "Participe",
    }
}

// ---------------------------------------------------------------------------
// Landing page
// ---------------------------------------------------------------------------

/// Shape a raw model reply into landing page content, falling back to the
/// deterministic template when no parseable JSON object is present.
pub fn landing_from_response(response: &str, req: &GenerateLandingRequest) -> LandingPage {
    extract::parse_embedded_object(response).unwrap_or_else(|| fallback_landing(req))
}

/// CTA wording for landing pages, keyed by the main goal.
pub fn landing_goal_cta(goal: LandingGoal) -> &'static str {
    match goal {
        LandingGoal::Leads => "Quero Mais Informações",
        LandingGoal::Sales => "Comprar Agora",
        LandingGoal::Awareness => "Saber Mais",
        LandingGoal::Engagement => "Começar Agora",
    }
}

/// Deterministic landing page construction from request fields alone.
pub fn fallback_landing(req: &GenerateLandingRequest) -> LandingPage {
    LandingPage {
        headline: format!("Transforme Seu {} Hoje", req.business_type),
        subheadline: format!(
            "Solução completa para {} alcançarem seus objetivos",
            req.target_audience
        ),
        bullets: vec![
            format!("✅ Resultados comprovados para {}", req.business_type),
            format!("✅ Especializado em {}", req.target_audience),
            "✅ Suporte completo e personalizado".to_string(),
            "✅ ROI garantido em 30 dias".to_string(),
            "✅ Implementação rápida e fácil".to_string(),
        ],
        cta: landing_goal_cta(req.main_goal).to_string(),
        html: fallback_landing_html(req),
        design_suggestions: DesignSuggestions {
            colors: vec!["#667eea".to_string(), "#764ba2".to_string()],
            typography: "Inter, sans-serif".to_string(),
        },
    }
}

/// Complete static page (hero, benefits, contact form) produced by pure
/// string templating. No external call is involved.
pub fn fallback_landing_html(req: &GenerateLandingRequest) -> String {
    let business_type = &req.business_type;
    let target_audience = &req.target_audience;
    let cta = landing_goal_cta(req.main_goal);

    format!(
        r##"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{business_type} - Landing Page</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{ font-family: 'Inter', sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 1200px; margin: 0 auto; padding: 0 20px; }}
        .hero {{ background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 80px 0; text-align: center; }}
        .hero h1 {{ font-size: 3rem; margin-bottom: 20px; font-weight: 700; }}
        .hero p {{ font-size: 1.2rem; margin-bottom: 30px; opacity: 0.9; }}
        .btn {{ display: inline-block; padding: 15px 30px; background: #ff6b6b; color: white; text-decoration: none; border-radius: 50px; font-weight: bold; transition: background 0.3s; margin-top: 20px; }}
        .btn:hover {{ background: #ff5252; transform: translateY(-2px); }}
        .benefits {{ padding: 60px 0; background: #f8f9fa; }}
        .benefits h2 {{ text-align: center; margin-bottom: 40px; color: #333; font-size: 2.5rem; }}
        .benefit-list {{ max-width: 600px; margin: 0 auto; }}
        .benefit-item {{ background: white; padding: 20px; margin: 15px 0; border-radius: 10px; box-shadow: 0 4px 15px rgba(0,0,0,0.1); font-size: 1.1rem; }}
        .cta-section {{ background: #667eea; color: white; padding: 60px 0; text-align: center; }}
        .form {{ max-width: 400px; margin: 30px auto; }}
        .form input, .form textarea {{ width: 100%; padding: 15px; margin: 10px 0; border: 1px solid #ddd; border-radius: 8px; font-size: 1rem; }}
        .form button {{ width: 100%; padding: 18px; background: #ff6b6b; color: white; border: none; border-radius: 8px; font-size: 1.2rem; cursor: pointer; font-weight: bold; }}
        .form button:hover {{ background: #ff5252; }}
        @media (max-width: 768px) {{
            .hero h1 {{ font-size: 2rem; }}
            .hero {{ padding: 40px 0; }}
            .benefits {{ padding: 40px 0; }}
        }}
    </style>
</head>
<body>
    <section class="hero">
        <div class="container">
            <h1>Transforme Seu {business_type} Hoje</h1>
            <p>Solução completa para {target_audience} alcançarem seus objetivos de forma eficiente e profissional</p>
            <a href="#form" class="btn">Quero Saber Mais</a>
        </div>
    </section>

    <section class="benefits">
        <div class="container">
            <h2>Por que escolher nossa solução?</h2>
            <div class="benefit-list">
                <div class="benefit-item">✅ Resultados comprovados para {business_type}</div>
                <div class="benefit-item">✅ Especializado em {target_audience}</div>
                <div class="benefit-item">✅ Suporte completo e personalizado</div>
                <div class="benefit-item">✅ ROI garantido em 30 dias</div>
                <div class="benefit-item">✅ Implementação rápida e fácil</div>
            </div>
        </div>
    </section>

    <section class="cta-section" id="form">
        <div class="container">
            <h2>Pronto para começar?</h2>
            <p>Preencha o formulário abaixo e nossa equipe entrará em contato</p>
            <form class="form" onsubmit="alert('Formulário enviado! Entraremos em contato em breve.'); return false;">
                <input type="text" placeholder="Seu nome completo" required>
                <input type="email" placeholder="Seu melhor e-mail" required>
                <input type="tel" placeholder="Seu telefone (WhatsApp)" required>
                <textarea placeholder="Conte-nos sobre seu projeto..." rows="4"></textarea>
                <button type="submit">{cta}</button>
            </form>
        </div>
    </section>
</body>
</html>"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts_req() -> GeneratePostsRequest {
        serde_json::from_str(
            r#"{"subject":"Sustentabilidade","tone":"inspirador","audience":"empresários","goal":"leads"}"#,
        )
        .unwrap()
    }

    fn landing_req(goal: &str) -> GenerateLandingRequest {
        serde_json::from_str(&format!(
            r#"{{"briefing":"consultoria","businessType":"SaaS","targetAudience":"PMEs","mainGoal":"{goal}"}}"#
        ))
        .unwrap()
    }

    fn model_posts_json(count: usize) -> String {
        let posts: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r##"{{"title":"T{i}","content":"C{i}","hashtags":["#a"],"cta":"Saiba mais","mediaType":"image","magicPrompt":"mp"}}"##
                )
            })
            .collect();
        format!("[{}]", posts.join(","))
    }

    #[test]
    fn fallback_batch_has_exactly_ten_posts() {
        let posts = fallback_posts(&posts_req());
        assert_eq!(posts.len(), POSTS_PER_BATCH);
        assert!(posts.iter().all(|p| !p.title.is_empty()
            && !p.content.is_empty()
            && !p.hashtags.is_empty()));
    }

    #[test]
    fn fallback_media_type_cycles_by_index() {
        let posts = fallback_posts(&posts_req());
        assert_eq!(posts[0].media_type.as_deref(), Some("image"));
        assert_eq!(posts[1].media_type.as_deref(), Some("video"));
        assert_eq!(posts[2].media_type.as_deref(), Some("carousel"));
        assert_eq!(posts[3].media_type.as_deref(), Some("image"));
    }

    #[test]
    fn fallback_is_deterministic() {
        let req = posts_req();
        let a = fallback_posts(&req);
        let b = fallback_posts(&req);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.title, y.title);
            assert_eq!(x.content, y.content);
            assert_eq!(x.hashtags, y.hashtags);
            assert_eq!(x.magic_prompt, y.magic_prompt);
        }
    }

    #[test]
    fn fallback_derives_hashtag_from_subject() {
        let req: GeneratePostsRequest =
            serde_json::from_str(r#"{"subject":"Marketing de Conteúdo"}"#).unwrap();
        let posts = fallback_posts(&req);
        assert_eq!(posts[0].hashtags[0], "#MarketingdeConteúdo");
    }

    #[test]
    fn fallback_cta_follows_goal() {
        assert_eq!(posts_goal_cta("leads"), "Saiba mais");
        assert_eq!(posts_goal_cta("sales"), "Compre agora");
        assert_eq!(posts_goal_cta("engagement"), "Participe");
        assert_eq!(posts_goal_cta("awareness"), "Participe");
    }

    #[test]
    fn fallback_posts_mention_subject_everywhere() {
        let posts = fallback_posts(&posts_req());
        for p in &posts {
            assert!(p.title.contains("Sustentabilidade"));
            assert!(p.content.contains("Sustentabilidade"));
        }
        assert_eq!(posts[0].cta.as_deref(), Some("Saiba mais"));
    }

    #[test]
    fn well_formed_model_reply_is_accepted() {
        let response = format!("Aqui estão:\n{}", model_posts_json(10));
        let posts = posts_from_response(&response, &posts_req());
        assert_eq!(posts.len(), POSTS_PER_BATCH);
        assert_eq!(posts[0].title, "T0");
    }

    #[test]
    fn oversized_model_reply_is_truncated() {
        let posts = posts_from_response(&model_posts_json(12), &posts_req());
        assert_eq!(posts.len(), POSTS_PER_BATCH);
        assert_eq!(posts[9].title, "T9");
    }

    #[test]
    fn short_model_reply_falls_back() {
        let posts = posts_from_response(&model_posts_json(3), &posts_req());
        assert_eq!(posts.len(), POSTS_PER_BATCH);
        assert!(posts[0].title.contains("Sustentabilidade"));
    }

    #[test]
    fn prose_reply_falls_back() {
        let posts = posts_from_response("desculpe, não consegui gerar", &posts_req());
        assert_eq!(posts.len(), POSTS_PER_BATCH);
    }

    #[test]
    fn landing_fallback_has_five_bullets_and_goal_cta() {
        let page = fallback_landing(&landing_req("leads"));
        assert_eq!(page.bullets.len(), 5);
        assert_eq!(page.cta, "Quero Mais Informações");
        assert!(page.headline.contains("SaaS"));
        assert!(page.subheadline.contains("PMEs"));
    }

    #[test]
    fn landing_goal_cta_mapping() {
        assert_eq!(landing_goal_cta(LandingGoal::Leads), "Quero Mais Informações");
        assert_eq!(landing_goal_cta(LandingGoal::Sales), "Comprar Agora");
        assert_eq!(landing_goal_cta(LandingGoal::Awareness), "Saber Mais");
        assert_eq!(landing_goal_cta(LandingGoal::Engagement), "Começar Agora");
    }

    #[test]
    fn landing_fallback_html_is_complete_page() {
        let html = fallback_landing_html(&landing_req("sales"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Transforme Seu SaaS Hoje"));
        assert!(html.contains("<form"));
        assert!(html.contains(">Comprar Agora</button>"));
    }

    #[test]
    fn landing_unparseable_reply_falls_back() {
        let page = landing_from_response("sem json aqui", &landing_req("leads"));
        assert_eq!(page.cta, "Quero Mais Informações");
        assert_eq!(page.bullets.len(), 5);
    }

    #[test]
    fn landing_parseable_reply_wins() {
        let reply = r##"Segue:
{"headline":"H","subheadline":"S","bullets":["1","2","3","4","5"],"cta":"Comprar Agora","html":"<html></html>","designSuggestions":{"colors":["#000"],"typography":"Roboto"}}"##;
        let page = landing_from_response(reply, &landing_req("sales"));
        assert_eq!(page.headline, "H");
        assert_eq!(page.design_suggestions.typography, "Roboto");
    }
}
