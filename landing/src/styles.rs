// Site stylesheet - oxford blue and gold palette

pub const SITE_CSS: &str = r#"
:root {
    --oxford-blue: #14213d;
    --blue-dark: #0b132b;
    --gold: #d4a017;
    --gold-light: #f5c542;
    --powder-blue: #b8d0eb;
    --slate-gray: #6b7a8f;
    --cream: #fdf8ec;
    --bg: #f7f5f0;
    --error: #dc2626;
    --bas-accent: var(--gold-light);
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    font-family: "Inter", system-ui, -apple-system, sans-serif;
    color: var(--oxford-blue);
    background: var(--bg);
    line-height: 1.6;
}

h1, h2, h3 { font-family: "Playfair Display", Georgia, serif; margin: 0; }

a { color: inherit; text-decoration: none; }

.container { width: 100%; max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }

/* Buttons */
.btn {
    display: inline-block;
    border: 0;
    border-radius: 0.5rem;
    padding: 0.6rem 1.1rem;
    font-weight: 700;
    cursor: pointer;
    transition: transform 0.2s ease, background 0.2s ease;
}
.btn:hover { transform: scale(1.05); }
.btn-primary { background: var(--gold); color: var(--blue-dark); box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2); }
.btn-primary:hover { background: var(--gold-light); }
.btn-primary:disabled { background: #9ca3af; cursor: not-allowed; transform: none; }
.btn-large { padding: 0.9rem 2rem; font-size: 1.1rem; }
.btn-block { width: 100%; padding: 0.9rem; }
.btn-link { background: none; color: var(--slate-gray); text-decoration: underline; padding: 0.25rem 0.5rem; }

/* Header */
.site-header { position: sticky; top: 0; z-index: 50; background: var(--blue-dark); box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3); }
.header-bar { display: flex; justify-content: space-between; align-items: center; padding-top: 1rem; padding-bottom: 1rem; }
.brand { display: flex; align-items: center; gap: 0.6rem; font-family: "Playfair Display", Georgia, serif; font-size: 1.5rem; font-weight: 700; color: var(--gold-light); }
.brand-logo { width: 2rem; height: 2rem; }
.nav-desktop { display: none; align-items: center; gap: 2rem; }
.nav-link { color: var(--cream); font-weight: 600; transition: color 0.2s ease; }
.nav-link:hover { color: var(--gold-light); }
.menu-toggle { background: none; border: 0; color: var(--cream); cursor: pointer; }
.menu-toggle svg { width: 1.5rem; height: 1.5rem; }
.nav-mobile { display: flex; flex-direction: column; gap: 0.5rem; padding: 0.5rem 1.5rem 1rem; text-align: center; }
.nav-link-mobile { display: block; padding: 0.5rem 0; }
@media (min-width: 768px) {
    .nav-desktop { display: flex; }
    .menu-toggle, .nav-mobile { display: none; }
}

/* Hero */
.hero { background: linear-gradient(135deg, var(--blue-dark), var(--oxford-blue)); color: var(--cream); padding: 5rem 0; }
.hero-grid { display: grid; gap: 3rem; align-items: center; }
.hero-title { font-size: clamp(2.25rem, 5vw, 3.75rem); line-height: 1.15; color: #fff; }
.hero-title-accent { color: var(--gold-light); }
.hero-description { font-size: 1.2rem; color: var(--powder-blue); margin: 1.5rem 0 2rem; }
@media (min-width: 1024px) { .hero-grid { grid-template-columns: 1fr 1fr; } }

/* Sections */
.section { padding: 5rem 0; }
.section-light { background: #fff; }
.section-muted { background: var(--bg); }
.section-dark { background: var(--oxford-blue); color: var(--powder-blue); }
.section-header { text-align: center; margin-bottom: 3rem; }
.section-title { font-size: 2.25rem; }
.section-dark .section-title { color: #fff; }
.section-intro { font-size: 1.1rem; color: var(--slate-gray); max-width: 42rem; margin: 1rem auto 0; }
.section-dark .section-intro { color: var(--powder-blue); }

.card-grid { display: grid; gap: 2rem; }
@media (min-width: 768px) { .card-grid { grid-template-columns: repeat(3, 1fr); } }
.card { height: 100%; background: var(--bg); border-radius: 0.75rem; padding: 2rem; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08); }
.card-title { font-size: 1.4rem; margin: 1rem 0 0.5rem; }
.card-text { color: var(--slate-gray); margin: 0; }
.service-icon { width: 3.5rem; height: 3.5rem; border-radius: 999px; display: grid; place-items: center; background: var(--oxford-blue); color: var(--gold-light); }
.service-icon svg { width: 2rem; height: 2rem; }

.testimonial-card { margin: 0; display: flex; flex-direction: column; justify-content: space-between; }
.testimonial-quote { margin: 0 0 1.5rem; font-style: italic; color: var(--slate-gray); }
.testimonial-author { display: flex; flex-direction: column; }
.testimonial-name { font-weight: 700; }
.testimonial-location { font-size: 0.9rem; color: var(--slate-gray); }

/* Gallery */
.gallery-grid { display: grid; gap: 3rem; }
@media (min-width: 1024px) { .gallery-grid { grid-template-columns: repeat(3, 1fr); } }
.gallery-item { margin: 0; }
.gallery-caption { display: flex; justify-content: space-between; align-items: center; margin-top: 1rem; }
.gallery-title { font-size: 1.5rem; }

/* Modal */
.modal-backdrop { position: fixed; inset: 0; z-index: 60; background: rgba(11, 19, 43, 0.85); display: grid; place-items: center; padding: 1.5rem; }
.modal-panel { position: relative; width: min(960px, 100%); }
.modal-close { position: absolute; top: -2.75rem; right: 0; background: none; border: 0; color: #fff; font-size: 2.25rem; line-height: 1; cursor: pointer; }
.modal-footer { display: flex; justify-content: space-between; align-items: center; margin-top: 1rem; color: #fff; }
.modal-nav { background: none; border: 1px solid rgba(255, 255, 255, 0.4); color: #fff; border-radius: 999px; width: 2.5rem; height: 2.5rem; font-size: 1.5rem; cursor: pointer; }
.modal-nav:disabled { opacity: 0.3; cursor: default; }

/* Contact */
.contact-card { max-width: 42rem; margin: 0 auto; background: #fff; color: var(--oxford-blue); border-radius: 0.75rem; padding: 2rem; box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.4); }
.form-row { display: grid; gap: 1.5rem; }
@media (min-width: 768px) { .form-row { grid-template-columns: 1fr 1fr; } }
.form-field { margin-bottom: 1.5rem; }
.form-label { display: block; font-size: 0.9rem; font-weight: 700; margin-bottom: 0.5rem; }
.form-input { width: 100%; padding: 0.5rem 0.75rem; border: 1px solid #d1d5db; border-radius: 0.375rem; font: inherit; }
.form-input:focus { outline: 2px solid var(--powder-blue); }
.form-input.invalid { border-color: var(--error); }
.form-error { color: var(--error); font-size: 0.8rem; margin: 0.25rem 0 0; }
.form-status-error { color: var(--error); text-align: center; }
.contact-success { text-align: center; padding: 2.5rem 0; }
.contact-success h3 { font-size: 1.6rem; margin-bottom: 0.5rem; }

/* Footer */
.footer { background: var(--oxford-blue); border-top: 1px solid rgba(107, 122, 143, 0.3); color: var(--powder-blue); text-align: center; padding: 1.5rem 0; }
.footer p { margin: 0; }
.footer-credits { display: flex; justify-content: center; gap: 0.4rem; font-size: 0.9rem; color: var(--slate-gray); margin-top: 0.25rem !important; }
.footer-heart { color: #e25555; }
.footer-link:hover { color: var(--gold-light); }

/* Scroll to top */
.scroll-top {
    position: fixed; bottom: 2rem; right: 2rem; z-index: 50;
    border: 0; border-radius: 999px; padding: 0.75rem; cursor: pointer;
    background: linear-gradient(135deg, var(--gold-light), var(--gold)); color: var(--oxford-blue);
    opacity: 0; transform: translateY(1rem); pointer-events: none;
    transition: opacity 0.3s ease, transform 0.3s ease;
}
.scroll-top.visible { opacity: 1; transform: none; pointer-events: auto; }
.scroll-top svg { width: 1.5rem; height: 1.5rem; display: block; }

/* Fade in */
.fade-in-element { height: 100%; opacity: 0; transition: opacity 0.7s ease-out, transform 0.7s ease-out; }
.fade-from-below { transform: translateY(1.25rem); }
.fade-from-above { transform: translateY(-1.25rem); }
.fade-from-right { transform: translateX(1.25rem); }
.fade-from-left { transform: translateX(-1.25rem); }
.fade-in-visible { opacity: 1; transform: none; }

@media (prefers-reduced-motion: reduce) {
    html { scroll-behavior: auto; }
    .fade-in-element, .scroll-top, .btn { transition: none; transform: none; }
    .fade-in-element { opacity: 1; }
}
"#;

#[cfg(test)]
mod tests {
    use super::SITE_CSS;

    #[test]
    fn covers_fade_in_states() {
        for class in [
            ".fade-in-visible",
            ".fade-from-below",
            ".fade-from-above",
            ".fade-from-left",
            ".fade-from-right",
        ] {
            assert!(SITE_CSS.contains(class), "{class}");
        }
    }

    #[test]
    fn reduced_motion_shows_content() {
        let reduced = SITE_CSS
            .split("prefers-reduced-motion")
            .nth(1)
            .unwrap_or_default();
        assert!(reduced.contains("opacity: 1"));
    }
}
