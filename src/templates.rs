use chrono::NaiveDate;
use tera::{Context, Tera};

use crate::error::Result;

// Names ending in .html/.xml are autoescaped by tera, robots.txt is not
const INDEX: &str = "index.html";
const RATE_LIMITED: &str = "rate_limited.html";
const ROBOTS: &str = "robots.txt";
const SITEMAP: &str = "sitemap.xml";

// Page assets compiled into the binary
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX, include_str!("../templates/index.html"))?;
        tera.add_raw_template(RATE_LIMITED, include_str!("../templates/rate_limited.html"))?;
        tera.add_raw_template(ROBOTS, include_str!("../templates/robots.txt"))?;
        tera.add_raw_template(SITEMAP, include_str!("../templates/sitemap.xml"))?;
        Ok(Self { tera })
    }

    pub fn render_page(&self, server_time: &str, request_count: u64) -> tera::Result<String> {
        let mut ctx = Context::new();
        ctx.insert("server_time", server_time);
        ctx.insert("request_count", &request_count);
        self.tera.render(INDEX, &ctx)
    }

    // The identity may come straight from X-Forwarded-For, autoescape covers it
    pub fn render_rate_limited(&self, ip: &str) -> tera::Result<String> {
        let mut ctx = Context::new();
        ctx.insert("ip", ip);
        self.tera.render(RATE_LIMITED, &ctx)
    }

    pub fn robots_txt(&self, domain: &str) -> tera::Result<String> {
        let mut ctx = Context::new();
        ctx.insert("domain", domain);
        self.tera.render(ROBOTS, &ctx)
    }

    pub fn sitemap_xml(&self, domain: &str, lastmod: NaiveDate) -> tera::Result<String> {
        let mut ctx = Context::new();
        ctx.insert("domain", domain);
        ctx.insert("lastmod", &lastmod.format("%Y-%m-%d").to_string());
        self.tera.render(SITEMAP, &ctx)
    }
}
