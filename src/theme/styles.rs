//! Global CSS styles for the portfolio page.
//!
//! Light palette by default; `.dark-theme` on the page root swaps the
//! custom properties. State classes (`minimized`, `hidden`, `show`,
//! `active`) are toggled from the view state.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --primary: #4f46e5;
  --primary-dark: #4338ca;
  --accent: #f59e0b;

  --bg: #ffffff;
  --bg-alt: #f8fafc;
  --card: #ffffff;
  --border: #e2e8f0;

  --text: #1e293b;
  --text-muted: #64748b;

  --success: #10b981;
  --danger: #ef4444;

  --shadow: 0 4px 20px rgba(15, 23, 42, 0.08);
  --radius: 12px;
  --header-height: 80px;
  --transition: all 0.3s ease;

  --font-sans: 'Poppins', 'Segoe UI', system-ui, sans-serif;
}

.page.dark-theme {
  --bg: #0f172a;
  --bg-alt: #1e293b;
  --card: #1e293b;
  --border: #334155;
  --text: #f1f5f9;
  --text-muted: #94a3b8;
  --shadow: 0 4px 20px rgba(0, 0, 0, 0.4);
}

/* === Base === */
* { margin: 0; padding: 0; box-sizing: border-box; }

html { scroll-behavior: smooth; }

body { font-family: var(--font-sans); }

.page {
  background: var(--bg);
  color: var(--text);
  min-height: 100vh;
  transition: background 0.3s ease, color 0.3s ease;
}

section { padding: 100px 8%; }

.section-title {
  font-size: 2.25rem;
  text-align: center;
  margin-bottom: 48px;
}

a { color: var(--primary); text-decoration: none; }

/* === Loader === */
.loader {
  position: fixed;
  inset: 0;
  background: var(--bg);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 2000;
  transition: opacity 0.5s ease, visibility 0.5s ease;
}

.loader.hidden { opacity: 0; visibility: hidden; }

.loader-spinner {
  width: 48px;
  height: 48px;
  border: 4px solid var(--border);
  border-top-color: var(--primary);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

/* === Header === */
.header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  background: var(--bg);
  z-index: 1000;
  transition: var(--transition);
}

.header.scrolled { box-shadow: var(--shadow); }
.header.minimized { height: 56px; }
.header.hidden { transform: translateY(-100%); }

.nav-overlay {
  position: fixed;
  inset: 0;
  background: rgba(15, 23, 42, 0.5);
  z-index: 999;
}

.header-inner {
  height: 100%;
  padding: 0 8%;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo { font-size: 1.5rem; font-weight: 700; }

.nav-menu { display: flex; gap: 32px; }

.nav-link { color: var(--text); font-weight: 500; transition: var(--transition); }
.nav-link:hover { color: var(--primary); }

.header-actions { display: flex; align-items: center; gap: 12px; }

.icon-btn {
  background: none;
  border: none;
  color: var(--text);
  font-size: 1.25rem;
  cursor: pointer;
}

.hamburger {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
}

.hamburger .bar {
  width: 25px;
  height: 3px;
  background: var(--text);
  transition: var(--transition);
}

.hamburger.active .bar:nth-child(1) { transform: translateY(8px) rotate(45deg); }
.hamburger.active .bar:nth-child(2) { opacity: 0; }
.hamburger.active .bar:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 12px 28px;
  border-radius: 999px;
  font-weight: 600;
  cursor: pointer;
  transition: var(--transition);
}

.btn-primary { background: var(--primary); color: #fff; border: 2px solid var(--primary); }
.btn-primary:hover { background: var(--primary-dark); }
.btn-secondary { background: transparent; color: var(--primary); border: 2px solid var(--primary); }
.btn:disabled { opacity: 0.6; cursor: not-allowed; }

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  overflow: hidden;
}

.particles { position: absolute; inset: 0; pointer-events: none; }

.particle {
  position: absolute;
  border-radius: 50%;
  background: var(--primary);
}

@keyframes float-particle {
  0% { transform: translateY(0) translateX(0); }
  50% { transform: translateY(-60px) translateX(20px); }
  100% { transform: translateY(0) translateX(0); }
}

.hero-content {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 48px;
  width: 100%;
}

.hero-title { font-size: 3rem; line-height: 1.2; }
.highlight { color: var(--primary); }
.hero-subtitle { color: var(--text-muted); margin: 16px 0 32px; }
.hero-buttons { display: flex; gap: 16px; }

.hero-image img {
  width: 320px;
  height: 320px;
  border-radius: 50%;
  object-fit: cover;
}

.image-fallback {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 100%;
  height: 100%;
  min-height: 180px;
  font-size: 4rem;
  background: var(--bg-alt);
  border-radius: var(--radius);
}

/* === About === */
.about-content { display: grid; grid-template-columns: 3fr 2fr; gap: 48px; }
.about-text p { color: var(--text-muted); margin-bottom: 16px; }

.stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 24px; margin-top: 32px; }
.stat-item { text-align: center; }
.stat-number { display: block; font-size: 2rem; font-weight: 700; color: var(--primary); }
.stat-label { color: var(--text-muted); font-size: 0.9rem; }

.about-card {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 100%;
  min-height: 240px;
  background: var(--bg-alt);
  border-radius: var(--radius);
  font-size: 5rem;
}

/* === Reveal animations === */
.fade-up { opacity: 0; transform: translateY(40px); transition: opacity 0.6s ease, transform 0.6s ease; }
.slide-left { opacity: 0; transform: translateX(-60px); transition: opacity 0.6s ease, transform 0.6s ease; }
.slide-right { opacity: 0; transform: translateX(60px); transition: opacity 0.6s ease, transform 0.6s ease; }
.fade-up.active, .slide-left.active, .slide-right.active { opacity: 1; transform: none; }

/* === Skills === */
.skills { background: var(--bg-alt); }
.skills-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 32px 48px; }
.skill-info { display: flex; justify-content: space-between; margin-bottom: 8px; }
.skill-level { color: var(--text-muted); }

.skill-bar {
  height: 10px;
  background: var(--border);
  border-radius: 999px;
  overflow: hidden;
}

.skill-progress {
  height: 100%;
  background: linear-gradient(90deg, var(--primary), var(--accent));
  border-radius: 999px;
  opacity: 0.6;
  transition: width 1.2s ease, opacity 0.6s ease;
}

.skill-progress.active { opacity: 1; }

/* === Projects === */
.project-filters { display: flex; justify-content: center; gap: 12px; margin-bottom: 40px; }

.filter-btn {
  padding: 8px 20px;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: var(--card);
  color: var(--text);
  cursor: pointer;
  transition: var(--transition);
}

.filter-btn.active, .filter-btn:hover { background: var(--primary); border-color: var(--primary); color: #fff; }

.projects-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 32px; }

.project-card {
  background: var(--card);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  overflow: hidden;
  transition: var(--transition);
}

.project-card:hover { transform: translateY(-6px); }
.project-image { height: 200px; }
.project-image img { width: 100%; height: 100%; object-fit: cover; }
.project-info { padding: 24px; }
.project-info p { color: var(--text-muted); margin: 8px 0 16px; }

.project-tags { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 16px; }
.project-tags span {
  padding: 4px 12px;
  border-radius: 999px;
  background: var(--bg-alt);
  color: var(--primary);
  font-size: 0.8rem;
}

/* === Modal === */
.modal {
  position: fixed;
  inset: 0;
  background: rgba(15, 23, 42, 0.7);
  display: none;
  align-items: center;
  justify-content: center;
  z-index: 1500;
}

.modal.show { display: flex; }

.modal-content {
  position: relative;
  width: min(640px, 90%);
  max-height: 85vh;
  overflow-y: auto;
  padding: 40px;
  background: var(--card);
  border-radius: var(--radius);
  animation: modal-in 0.3s ease;
}

@keyframes modal-in { from { opacity: 0; transform: translateY(-30px); } to { opacity: 1; transform: none; } }

.modal-close { position: absolute; top: 16px; right: 20px; font-size: 1.75rem; }
.modal-title { margin-bottom: 12px; }
.modal-description { color: var(--text-muted); margin-bottom: 24px; }
.modal-content h3 { margin: 16px 0 8px; }
.modal-features { padding-left: 20px; color: var(--text-muted); }
.modal-links { margin-top: 24px; }

/* === Contact === */
.contact-content { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; }

.form-group { position: relative; display: flex; flex-direction: column; margin-bottom: 20px; }
.form-group label { order: -1; font-weight: 500; margin-bottom: 6px; }

.form-input {
  padding: 12px 16px;
  border: 2px solid var(--border);
  border-radius: 8px;
  background: var(--card);
  color: var(--text);
  font: inherit;
  transition: border-color 0.2s ease;
}

.form-input:focus { outline: none; border-color: var(--primary); }
.form-input.input-error { border-color: var(--danger); }
.form-input.input-success { border-color: var(--success); }

.error-message { min-height: 1.2em; color: var(--danger); font-size: 0.85rem; margin-top: 4px; }

.contact-map iframe {
  width: 100%;
  height: 360px;
  border: 0;
  border-radius: var(--radius);
}

.map-actions { display: flex; gap: 12px; margin-top: 16px; }

/* === Toast === */
.toast {
  position: fixed;
  bottom: 32px;
  right: 32px;
  display: flex;
  align-items: center;
  gap: 12px;
  padding: 16px 24px;
  background: var(--success);
  color: #fff;
  border-radius: 8px;
  box-shadow: var(--shadow);
  transform: translateY(150%);
  opacity: 0;
  transition: var(--transition);
  z-index: 1800;
}

.toast.show { transform: none; opacity: 1; }

/* === Back to top === */
.back-to-top {
  position: fixed;
  bottom: 32px;
  left: 32px;
  width: 48px;
  height: 48px;
  border-radius: 50%;
  background: var(--primary);
  color: #fff;
  opacity: 0;
  visibility: hidden;
  transition: var(--transition);
  z-index: 900;
}

.back-to-top.visible { opacity: 1; visibility: visible; }

/* === Footer === */
.footer {
  position: relative;
  padding: 48px 8% 24px;
  background: var(--bg-alt);
  text-align: center;
  transition: var(--transition);
}

.footer.minimized { padding: 16px 8%; }
.footer.minimized .footer-content { display: none; }

.footer-toggle {
  position: absolute;
  top: 8px;
  right: 16px;
  background: none;
  border: none;
  color: var(--text-muted);
  cursor: pointer;
}

.footer-tagline { margin-bottom: 16px; }
.social-links { display: flex; justify-content: center; gap: 20px; margin-bottom: 24px; }
.copyright { color: var(--text-muted); font-size: 0.85rem; }

/* === Responsive (< 768px) === */
@media (max-width: 768px) {
  section { padding: 80px 6%; }

  .hamburger { display: flex; }

  .nav-menu {
    position: fixed;
    top: var(--header-height);
    left: -100%;
    width: 100%;
    height: calc(100vh - var(--header-height));
    flex-direction: column;
    align-items: center;
    padding-top: 48px;
    background: var(--bg);
    transition: left 0.3s ease;
  }

  .nav-menu.active { left: 0; }

  .hero-content, .about-content, .contact-content { grid-template-columns: 1fr; flex-direction: column; }
  .skills-grid { grid-template-columns: 1fr; }
  .stats { grid-template-columns: repeat(2, 1fr); }
  .hero-title { font-size: 2.25rem; }
  .hero-image img { width: 220px; height: 220px; }
}
"#;
