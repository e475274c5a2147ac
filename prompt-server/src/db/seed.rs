//! Initial Data Seeding
//!
//! 加载初始分类、模板和关键词。这是服务接受流量之前的
//! 显式步骤 (由 main 调用一次，或通过 `prompt-server seed`
//! 强制重新加载)，请求处理路径中没有任何建表/播种回退。
//!
//! 模板组和关键词组通过精确的 slug 映射挂到分类上，
//! 不做子串模糊匹配。

use std::collections::HashMap;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;

use crate::db::models::{Category, Keyword, PromptTemplate};
use crate::db::repository::{
    CategoryRepository, KeywordRepository, PromptTemplateRepository, RepoError, RepoResult,
};

/// (display name, slug)
const CATEGORIES: &[(&str, &str)] = &[
    ("ChatGPT", "chatgpt"),
    ("Midjourney", "midjourney"),
    ("Blogging / SEO", "blogging-seo"),
    ("Coding", "coding"),
    ("Social Media", "social-media"),
];

/// (category slug, template name, template body)
const TEMPLATES: &[(&str, &str, &str)] = &[
    (
        "chatgpt",
        "Detailed Explanation",
        "I need a detailed explanation about {topic}. Include the following aspects: 1) Basic introduction, 2) Historical context, 3) Current applications, 4) Future potential, and 5) Key challenges. Please use simple language and provide real-world examples.",
    ),
    (
        "chatgpt",
        "Step-by-Step Guide",
        "Create a comprehensive step-by-step guide on {topic}. For each step, provide: 1) What to do, 2) Why it's important, 3) Common mistakes to avoid, and 4) A tip for success. Make it suitable for beginners.",
    ),
    (
        "chatgpt",
        "Expert Analysis",
        "Analyze {topic} from an expert perspective. Consider different viewpoints, latest research, statistical data, and industry standards. Conclude with actionable insights and future predictions.",
    ),
    (
        "chatgpt",
        "Comparison Framework",
        "Compare and contrast different approaches to {topic}. Create a structured comparison with categories like effectiveness, cost, time investment, complexity, and outcomes. End with recommendations for different scenarios.",
    ),
    (
        "midjourney",
        "Photorealistic Scene",
        "Photorealistic image of {topic}, golden hour lighting, dramatic shadows, detailed textures, 8k resolution, hyperrealistic, cinematic composition, --ar 16:9 --v 5 --q 2",
    ),
    (
        "midjourney",
        "Fantasy Illustration",
        "Fantasy illustration of {topic}, magical atmosphere, glowing elements, intricate details, vibrant colors, digital art, concept art style, Greg Rutkowski, Artgerm, --ar 3:4 --v 5 --q 2",
    ),
    (
        "midjourney",
        "Isometric Design",
        "Isometric design of {topic}, clean lines, colorful palette, miniature style, cute, professional 3D rendering, low poly art, architectural visualization, --ar 1:1 --v 5 --q 2",
    ),
    (
        "midjourney",
        "Abstract Art",
        "Abstract representation of {topic}, fluid shapes, bold color contrasts, experimental, modern art, digital painting, generative art, Jackson Pollock inspiration, --ar 16:9 --v 5 --stylize 1000",
    ),
    (
        "blogging-seo",
        "SEO-Optimized Article",
        "Write an SEO-optimized article about {topic} that is 1000 words long. Include: 1) An engaging introduction with statistics, 2) 5 subheadings with H2 tags, 3) Bullet points for key takeaways, 4) A conclusion with a call-to-action, and 5) Meta description of 150 characters. Target audience: beginners seeking practical advice.",
    ),
    (
        "blogging-seo",
        "Listicle Post",
        "Create a '10 Best {topic}' listicle blog post. For each item include: name, key features, pros and cons, pricing (if applicable), and why it made the list. Add a buyer's guide section at the end with 3 tips for choosing the right option. Optimize for keywords related to '{topic} recommendations'.",
    ),
    (
        "blogging-seo",
        "How-To Guide",
        "Write a comprehensive how-to guide on {topic} with these sections: 1) Introduction explaining why this skill matters, 2) Materials/tools needed, 3) Step-by-step instructions with images suggestions, 4) Troubleshooting common problems, 5) Advanced tips for experienced users, and 6) FAQs. Include internal linking suggestions.",
    ),
    (
        "blogging-seo",
        "Expert Interview",
        "Generate a mock expert interview about {topic} with 10 insightful questions and detailed answers. Structure it with an introduction to the expert (you can invent a suitable persona), the main interview content, and a conclusion with key insights. Include pull quotes that would work well for social media sharing.",
    ),
    (
        "coding",
        "Project Structure",
        "Help me plan a software project for {topic}. Include: 1) Recommended tech stack with reasoning, 2) Folder structure and architecture pattern, 3) Key features for MVP, 4) Potential challenges and solutions, 5) Testing strategy, and 6) Deployment considerations. I'm an intermediate developer focused on creating a maintainable codebase.",
    ),
    (
        "coding",
        "Algorithm Implementation",
        "Explain and implement an efficient algorithm for {topic}. Please: 1) Describe the problem clearly, 2) Explain the algorithm's approach and time/space complexity, 3) Provide pseudocode, 4) Implement the solution in Python or JavaScript (preferred), 5) Add comprehensive comments, and 6) Include test cases covering edge scenarios.",
    ),
    (
        "coding",
        "Code Refactoring",
        "I need to refactor code related to {topic}. Please provide guidance on: 1) Common code smells to look for, 2) Refactoring techniques specific to this domain, 3) Design patterns that might improve the architecture, 4) Performance optimization strategies, and 5) Best practices for maintaining code quality after refactoring.",
    ),
    (
        "coding",
        "API Design",
        "Design a RESTful API for {topic}. Include: 1) Resource modeling and endpoints, 2) Request/response examples in JSON, 3) Authentication and authorization strategy, 4) Error handling approach, 5) Pagination and filtering options, 6) API versioning strategy, and 7) Documentation structure. Focus on creating a developer-friendly and scalable API.",
    ),
    (
        "social-media",
        "Content Calendar",
        "Create a 2-week content calendar for {topic} across Instagram, Twitter, and LinkedIn. For each platform, provide: 1) 3 post ideas per week with optimal posting times, 2) Hashtag suggestions (5-10 per post), 3) Caption templates that encourage engagement, 4) Content themes to maintain consistency, and 5) Ideas for Stories/ephemeral content. Target audience: [describe your audience].",
    ),
    (
        "social-media",
        "Viral Post Formula",
        "Design 5 potentially viral social media posts about {topic}. For each post: 1) Platform it's optimized for, 2) Hook/opening line that grabs attention, 3) Content structure and format (carousel, video script, etc.), 4) Call-to-action to maximize engagement, 5) Psychological trigger it leverages (curiosity, controversy, etc.). Include tips for riding trending topics related to {topic}.",
    ),
    (
        "social-media",
        "Engagement Strategy",
        "Develop an engagement strategy for a {topic} focused social media account. Include: 1) Community building tactics, 2) 10 conversation starters/questions to ask followers, 3) Response templates for common scenarios (praise, complaints, questions), 4) User-generated content campaign ideas, 5) Engagement metrics to track, and 6) Competitor analysis framework to identify engagement opportunities.",
    ),
    (
        "social-media",
        "Influencer Campaign",
        "Plan an influencer marketing campaign for {topic}. Outline: 1) Criteria for selecting appropriate influencers, 2) Outreach message template, 3) Campaign brief structure, 4) Collaboration ideas beyond standard sponsored posts, 5) Tracking KPIs and ROI, 6) Compliance and disclosure requirements, and 7) Strategy for repurposing influencer-generated content across channels.",
    ),
];

/// (category slug, keyword text, related terms)
///
/// 每个分类内按位置赋初始热度：前 5 个为 10..6，其余为 5
const KEYWORDS: &[(&str, &str, &str)] = &[
    // chatgpt
    ("chatgpt", "AI assistant", "virtual assistant, chatbot, digital helper, AI chat, language model"),
    ("chatgpt", "natural language", "NLP, language processing, text analysis, linguistics, conversation"),
    ("chatgpt", "GPT-4", "GPT-3, large language model, OpenAI, AI model, transformer"),
    ("chatgpt", "machine learning", "AI, deep learning, neural networks, algorithms, data science"),
    ("chatgpt", "conversational AI", "dialogue systems, chat interface, interactive AI, voice assistant"),
    ("chatgpt", "prompt engineering", "AI prompts, input design, instruction crafting, query formation"),
    ("chatgpt", "AI writing", "content generation, automated writing, text creation, AI author"),
    ("chatgpt", "creative writing", "storytelling, fiction, narrative, creative content, imaginative text"),
    ("chatgpt", "fact checking", "information verification, accuracy, truth assessment, validation"),
    ("chatgpt", "AI ethics", "responsible AI, AI safety, fairness, bias, transparency"),
    // midjourney
    ("midjourney", "digital art", "digital illustration, computer art, digital painting, digital design"),
    ("midjourney", "generative AI", "AI art, image generation, AI-created images, machine-made art"),
    ("midjourney", "illustration", "drawing, artwork, visual representation, graphic design, picture"),
    ("midjourney", "3D rendering", "CGI, 3D graphics, 3D visualization, 3D modeling, three-dimensional"),
    ("midjourney", "fantasy art", "magical scenes, fantastical imagery, mythical art, imaginative art"),
    ("midjourney", "portrait style", "character design, face rendering, human figure, person illustration"),
    ("midjourney", "landscape scene", "scenery, vista, environment art, natural setting, outdoor scene"),
    ("midjourney", "concept art", "visual development, pre-production art, design concept, idea visualization"),
    ("midjourney", "photorealistic", "hyperrealistic, lifelike, true-to-life, realistic rendering"),
    ("midjourney", "abstract design", "non-representational, geometric, expressionist, non-figurative art"),
    // blogging-seo
    ("blogging-seo", "content marketing", "content strategy, inbound marketing, digital marketing, content creation"),
    ("blogging-seo", "keyword research", "SEO keywords, search terms, keyword analysis, query research"),
    ("blogging-seo", "blog optimization", "blog SEO, content optimization, blogging strategy, website optimization"),
    ("blogging-seo", "article writing", "blog post creation, content writing, web articles, written content"),
    ("blogging-seo", "SEO tactics", "search engine optimization, SEO techniques, ranking strategies, SERP improvement"),
    ("blogging-seo", "backlink strategy", "link building, external links, inbound links, link profile"),
    ("blogging-seo", "audience engagement", "reader interaction, user engagement, audience retention, engagement metrics"),
    ("blogging-seo", "content calendar", "editorial calendar, publishing schedule, content planning, post timeline"),
    ("blogging-seo", "conversion optimization", "CRO, conversion rate, user conversion, action optimization"),
    ("blogging-seo", "meta descriptions", "meta tags, SERP snippet, search preview, page description"),
    // coding
    ("coding", "Python", "Python programming, python code, python syntax, python development, python script"),
    ("coding", "JavaScript", "JS, ECMAScript, frontend code, web scripting, JS development"),
    ("coding", "web development", "web design, website creation, web programming, web apps, frontend"),
    ("coding", "algorithms", "data structures, computational procedures, coding algorithms, problem-solving approaches"),
    ("coding", "data structures", "arrays, linked lists, trees, hash tables, computational structures"),
    ("coding", "API development", "API design, endpoints, REST API, API integration, web services"),
    ("coding", "testing frameworks", "unit testing, test automation, QA tools, test suites, code testing"),
    ("coding", "version control", "git, GitHub, code repository, commit history, branches"),
    ("coding", "database design", "SQL, NoSQL, data modeling, schema design, relational databases"),
    ("coding", "mobile development", "app creation, iOS, Android, mobile apps, smartphone applications"),
    // social-media
    ("social-media", "Instagram", "IG, Insta, Instagram marketing, Instagram content, Instagram strategy"),
    ("social-media", "TikTok", "TikTok videos, short-form content, TikTok trends, TikTok marketing"),
    ("social-media", "content strategy", "content planning, social strategy, content marketing, posting strategy"),
    ("social-media", "engagement", "likes, comments, shares, follower interaction, audience engagement"),
    ("social-media", "audience growth", "follower growth, increasing followers, expanding reach, growing audience"),
    ("social-media", "hashtag strategy", "hashtag research, trending hashtags, hashtag optimization, tag selection"),
    ("social-media", "social media bio", "profile description, account bio, self-introduction, profile text, about me section"),
    ("social-media", "content creation", "post creation, social media content, original posts, media creation"),
    ("social-media", "reels creation", "short videos, Instagram reels, video content, short-form video"),
    ("social-media", "social analytics", "metrics tracking, performance analysis, engagement stats, reach metrics"),
];

/// (category slug, text, related terms, popularity) - 常见搜索词
const COMMON_SEARCH_TERMS: &[(&str, &str, &str, i64)] = &[
    ("social-media", "create best bio for Instagram", "Instagram bio, profile bio, good bio, attractive bio, bio examples", 8),
    ("social-media", "create best bio for Twitter", "Twitter bio, profile bio, good bio, attractive bio, bio examples", 7),
    ("social-media", "how to add best bio for men", "male bio, men profile, dating bio, attractive bio for guys", 9),
    ("coding", "create a simple python code", "basic python, python beginner, hello world, simple script, python example", 8),
    ("coding", "create a simple JavaScript function", "JS function, basic JavaScript, beginner JS, function example", 6),
    ("chatgpt", "kamlesh name related", "name meaning, name origin, name information, personal name", 5),
    ("chatgpt", "write a poem about", "poetry, creative writing, verses, rhymes, sonnet", 9),
];

/// Load initial categories, templates and keywords
///
/// 非 force 模式下数据库已有分类时跳过 (返回 false)。
/// force 模式清空三张表后重新加载。
pub async fn load_initial_data(db: &Surreal<Db>, force: bool) -> RepoResult<bool> {
    let categories = CategoryRepository::new(db.clone());
    let keywords = KeywordRepository::new(db.clone());
    let templates = PromptTemplateRepository::new(db.clone());

    if categories.count().await? > 0 {
        if !force {
            tracing::info!("Seed skipped: categories already present");
            return Ok(false);
        }
        tracing::info!("Clearing existing data...");
        db.query("DELETE keyword; DELETE prompt_template; DELETE category;")
            .await
            .map_err(RepoError::from)?;
    }

    // 分类：构建精确的 slug -> record id 映射
    let mut by_slug: HashMap<&str, Thing> = HashMap::new();
    for &(name, slug) in CATEGORIES {
        let created = categories.create(Category::new(name, slug)).await?;
        let id = created
            .id
            .ok_or_else(|| RepoError::Database("Created category has no id".to_string()))?;
        by_slug.insert(slug, id);
        tracing::info!("Created category: {name}");
    }

    let category_for = |slug: &str| -> RepoResult<Thing> {
        by_slug
            .get(slug)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(format!("No category for slug: {slug}")))
    };

    let mut template_count = 0;
    for &(slug, name, body) in TEMPLATES {
        let category = category_for(slug)?;
        templates
            .create(PromptTemplate::new(name, body, category))
            .await?;
        template_count += 1;
    }
    tracing::info!("Created {template_count} prompt templates");

    let mut keyword_count = 0;
    let mut position: HashMap<&str, i64> = HashMap::new();
    for &(slug, text, related) in KEYWORDS {
        let category = category_for(slug)?;
        let i = position.entry(slug).or_insert(0);
        // 每个分类的前 5 个关键词热度递减 (10..6)，其余为 5
        let popularity = if *i < 5 { 10 - *i } else { 5 };
        *i += 1;

        let mut keyword = Keyword::new(text, category);
        keyword.popularity = popularity;
        keyword.related_keywords = related.to_string();
        keywords.insert(keyword).await?;
        keyword_count += 1;
    }
    tracing::info!("Created {keyword_count} initial keywords");

    for &(slug, text, related, popularity) in COMMON_SEARCH_TERMS {
        let category = category_for(slug)?;
        let mut keyword = Keyword::new(text, category);
        keyword.popularity = popularity;
        keyword.related_keywords = related.to_string();
        keywords.insert(keyword).await?;
    }
    tracing::info!("Added {} common search terms", COMMON_SEARCH_TERMS.len());

    tracing::info!("Successfully loaded initial data");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    #[tokio::test]
    async fn test_seed_loads_full_dataset() {
        let service = DbService::memory().await.unwrap();
        crate::db::schema::define(&service.db).await.unwrap();

        let seeded = load_initial_data(&service.db, false).await.unwrap();
        assert!(seeded);

        let categories = CategoryRepository::new(service.db.clone());
        let all = categories.find_all().await.unwrap();
        assert_eq!(all.len(), 5);

        // coding 分类: 10 个初始关键词 + 2 个常见搜索词
        let coding = categories.find_by_slug("coding").await.unwrap().unwrap();
        let keywords = KeywordRepository::new(service.db.clone());
        assert_eq!(
            keywords.count_by_category(coding.id.as_ref().unwrap()).await.unwrap(),
            12
        );
    }

    #[tokio::test]
    async fn test_seed_is_skipped_when_data_present() {
        let service = DbService::memory().await.unwrap();
        crate::db::schema::define(&service.db).await.unwrap();

        assert!(load_initial_data(&service.db, false).await.unwrap());
        assert!(!load_initial_data(&service.db, false).await.unwrap());

        // force 重新加载不会产生重复分类
        assert!(load_initial_data(&service.db, true).await.unwrap());
        let categories = CategoryRepository::new(service.db.clone());
        assert_eq!(categories.find_all().await.unwrap().len(), 5);
    }
}
