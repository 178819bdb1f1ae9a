//! Server block rendering.
//!
//! `render` is the only place that knows the text of a generated config.
//! Every directive, comment and indentation level below is part of the output
//! contract and pinned by golden tests.

use super::answer::Answer;
use super::preset::Preset;

const INDENT: &str = "    ";

const HSTS_BLOCK: &[&str] = &[
    "#Send HSTS header",
    "add_header Strict-Transport-Security \"max-age=31536000; includeSubDomains; preload\";",
];

const HARDENING_BLOCK: &[&str] = &[
    "#Turn off nginx version number displayed on all auto generated error pages",
    "server_tokens off;",
    "#Controlling Buffer Overflow Attacks",
    "#Start: Size Limits & Buffer Overflows",
    "client_body_buffer_size 1K;",
    "client_header_buffer_size 1k;",
    "client_max_body_size 1k;",
    "large_client_header_buffers 2 1k;",
    "#END: Size Limits & Buffer Overflows",
    "#Start: Timeouts",
    "client_body_timeout 10;",
    "client_header_timeout 10;",
    "keepalive_timeout 5 5;",
    "send_timeout 10;",
    "#End: Timeout",
    "#Avoid clickjacking",
    "add_header X-Frame-Options SAMEORIGIN;",
    "#Disable content-type sniffing on some browsers",
    "add_header X-Content-Type-Options nosniff;",
    "#Enable the Cross-site scripting (XSS) filter",
    "add_header X-XSS-Protection \"1; mode=block\";",
];

const STATIC_ASSET_PATTERN: &str = "~* \\.(js|css|json|png|jpg|jpeg|gif|ico)$";
const PHP_FPM_SOCKET: &str = "unix:/var/run/php/php7.2-fpm.sock";
const CERTIFICATE_DIR: &str = "/etc/letsencrypt/live";

/// A rendered configuration and the name its file is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedConfig {
    pub name: String,
    pub document: String,
}

/// Render `answer` into an nginx server block.
///
/// Total over any answer that satisfies [`Answer::validate`]; missing optional
/// fields render as empty strings rather than failing.
pub fn render(answer: &Answer) -> RenderedConfig {
    let name = answer.name().to_string();
    let mut out = Writer::default();

    out.line(0, "server {");
    for address in ["", "[::]:"] {
        out.line(1, &listen_line(answer, address));
    }
    out.line(1, &format!("server_name {};", answer.server_names()));
    out.line(1, "access_log off;");
    out.line(1, "error_log /dev/null crit;");

    if answer.uses_tls() {
        // Certificates are documented only; they cannot be checked to exist.
        out.line(1, "#ssl_protocols TLSv1.2 TLSv1.3;");
        out.line(1, &format!("#ssl_certificate {CERTIFICATE_DIR}/{name}/fullchain.pem;"));
        out.line(1, &format!("#ssl_certificate_key {CERTIFICATE_DIR}/{name}/privkey.pem;"));
    }

    if answer.send_hsts {
        out.lines(1, HSTS_BLOCK);
    }

    preset_body(&mut out, answer);

    if answer.harden_security {
        out.lines(1, HARDENING_BLOCK);
    }

    if answer.caching_applies() {
        out.line(1, &format!("location {STATIC_ASSET_PATTERN} {{"));
        out.line(2, &format!("expires {};", answer.cache_age()));
        out.line(2, "add_header Cache-Control \"public, no-transform\";");
        out.line(1, "}");
    }

    out.line(0, "}");
    RenderedConfig { name, document: out.finish() }
}

fn listen_line(answer: &Answer, address: &str) -> String {
    let mut line = String::new();
    if answer.uses_tls() {
        line.push('#');
    }
    line.push_str(&format!("listen {address}{}", answer.listen_port));
    if answer.is_default_server {
        line.push_str(" default_server");
    }
    if answer.uses_tls() {
        line.push_str(" ssl");
    }
    line.push_str(" http2;");
    line
}

fn preset_body(out: &mut Writer, answer: &Answer) {
    let root = answer.document_root.as_deref().unwrap_or_default();
    let target = answer.upstream_or_redirect_target.as_deref().unwrap_or_default();

    match answer.preset {
        Preset::StaticIndexed => {
            out.line(1, &format!("root {root};"));
            out.block(1, "location /", &["index index.html;"]);
        }
        Preset::StaticBare => {
            out.block(1, "location /", &[format!("root {root};").as_str()]);
        }
        Preset::RoutedSpa => {
            out.line(1, &format!("root {root};"));
            out.line(1, "index index.html;");
            out.block(1, "location /", &["try_files $uri $uri/ @rewrites;"]);
            out.block(1, "location @rewrites", &["rewrite ^(.+)$ /index.html last;"]);
        }
        Preset::PhpFastCgi => {
            out.line(1, &format!("root {root};"));
            out.line(1, "index index.php;");
            out.block(
                1,
                "location /",
                &[
                    "try_files $uri $uri/ =404;",
                    "autoindex  on;",
                    "autoindex_exact_size off;",
                    "autoindex_localtime on;",
                ],
            );
            out.block(
                1,
                "location ~* \\.php$",
                &[
                    "include snippets/fastcgi-php.conf;",
                    format!("fastcgi_pass  {PHP_FPM_SOCKET};").as_str(),
                ],
            );
        }
        Preset::ReverseProxy | Preset::ProxyCustomPort => {
            out.block(
                1,
                "location /",
                &[format!("proxy_pass {target};").as_str(), "proxy_read_timeout  90;"],
            );
        }
        Preset::PermanentRedirect => {
            out.line(1, &format!("return 308 {target};"));
        }
        Preset::DefaultHttpsRedirect => {
            out.line(1, "return 308 https://$host$request_uri;");
        }
    }
}

#[derive(Default)]
struct Writer {
    buf: String,
}

impl Writer {
    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn lines(&mut self, depth: usize, texts: &[&str]) {
        for text in texts {
            self.line(depth, text);
        }
    }

    fn block(&mut self, depth: usize, header: &str, body: &[&str]) {
        self.line(depth, &format!("{header} {{"));
        self.lines(depth + 1, body);
        self.line(depth, "}");
    }

    fn finish(self) -> String {
        self.buf
    }
}
