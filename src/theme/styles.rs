//! Global CSS for the portfolio page.
//!
//! Black page, zinc surfaces, emerald accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --page-black: #000000;
  --zinc-900: #18181b;
  --zinc-800: #27272a;
  --zinc-700: #3f3f46;

  --emerald: #10b981;
  --emerald-soft: rgba(16, 185, 129, 0.12);
  --emerald-glow: rgba(16, 185, 129, 0.35);
  --amber: #fbbf24;
  --purple: #a855f7;
  --blue: #3b82f6;

  --text-primary: #fafafa;
  --text-muted: #a1a1aa;

  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --radius: 16px;
  --header-height: 72px;
  --ease: cubic-bezier(0.22, 1, 0.36, 1);
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
  margin: 0;
  background: var(--page-black);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
  overflow-x: hidden;
}

a { color: inherit; text-decoration: none; }

button { font: inherit; cursor: pointer; }
button:disabled { cursor: default; opacity: 0.35; }

section { position: relative; z-index: 1; padding: 6rem 1.5rem; scroll-margin-top: var(--header-height); }

.section-inner { max-width: 1200px; margin: 0 auto; }

.section-title { font-size: 2.5rem; font-weight: 700; margin: 0 0 0.5rem; }
.section-title .accent { color: var(--emerald); }
.section-subtitle { color: var(--text-muted); margin: 0 0 3rem; max-width: 40rem; }

/* === Buttons === */
.btn-primary, .btn-outline, .btn-ghost {
  border-radius: 999px;
  padding: 0.75rem 1.75rem;
  font-weight: 600;
  transition: transform 0.2s var(--ease), box-shadow 0.2s var(--ease), background 0.2s;
}
.btn-primary { background: var(--emerald); color: #022c22; border: 1px solid var(--emerald); }
.btn-primary:hover { box-shadow: 0 0 24px var(--emerald-glow); transform: translateY(-2px); }
.btn-outline { background: transparent; color: var(--text-primary); border: 1px solid var(--zinc-700); }
.btn-outline:hover { border-color: var(--emerald); color: var(--emerald); }
.btn-ghost { background: transparent; border: none; color: var(--text-muted); padding: 0.5rem 0.75rem; }
.btn-ghost:hover { color: var(--text-primary); }

.btn-arrow {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  z-index: 2;
  width: 44px;
  height: 44px;
  border-radius: 50%;
  border: 1px solid var(--zinc-700);
  background: rgba(24, 24, 27, 0.85);
  color: var(--text-primary);
  font-size: 1.5rem;
  line-height: 1;
}
.btn-arrow:not(:disabled):hover { border-color: var(--emerald); color: var(--emerald); }
.btn-arrow.arrow-left { left: -22px; }
.btn-arrow.arrow-right { right: -22px; }

.icon-btn { background: transparent; border: none; color: var(--text-muted); font-size: 1.75rem; line-height: 1; }
.icon-btn:hover { color: var(--text-primary); }

/* === Header === */
.site-header {
  position: fixed;
  inset: 0 0 auto 0;
  z-index: 50;
  height: var(--header-height);
  transition: background 0.3s, border-color 0.3s, backdrop-filter 0.3s;
  border-bottom: 1px solid transparent;
}
.site-header.scrolled {
  background: rgba(0, 0, 0, 0.85);
  backdrop-filter: blur(12px);
  border-bottom-color: var(--zinc-800);
}
.site-header .header-inner {
  max-width: 1200px;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}
.brand { font-weight: 800; font-size: 1.35rem; letter-spacing: -0.02em; }
.brand .dot { color: var(--emerald); }
.nav-links { display: flex; gap: 0.25rem; }
.menu-toggle { display: none; }
.mobile-menu {
  position: fixed;
  inset: var(--header-height) 0 auto 0;
  z-index: 49;
  background: rgba(0, 0, 0, 0.95);
  border-bottom: 1px solid var(--zinc-800);
  display: flex;
  flex-direction: column;
  padding: 1rem 1.5rem;
}

/* === Hero === */
.hero { min-height: 100vh; display: flex; align-items: center; padding-top: calc(var(--header-height) + 2rem); }
.hero-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  border: 1px solid var(--zinc-800);
  border-radius: 999px;
  padding: 0.35rem 1rem;
  color: var(--text-muted);
  font-size: 0.875rem;
}
.hero-badge .pulse { width: 8px; height: 8px; border-radius: 50%; background: var(--emerald); animation: pulse 2s infinite; }
.hero h1 { font-size: clamp(2.5rem, 6vw, 4.5rem); line-height: 1.1; margin: 1.5rem 0; letter-spacing: -0.03em; }
.hero h1 .accent { color: var(--emerald); }
.hero p.lead { font-size: 1.2rem; color: var(--text-muted); max-width: 38rem; }
.hero-actions { display: flex; gap: 1rem; margin-top: 2rem; flex-wrap: wrap; }

/* === Stats === */
.stats-bar { padding: 2rem 1.5rem; }
.stats-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; max-width: 1200px; margin: 0 auto; }
.stat-card { background: var(--zinc-900); border: 1px solid var(--zinc-800); border-radius: var(--radius); padding: 1.5rem; text-align: center; }
.stat-card .icon { font-size: 1.5rem; color: var(--emerald); }
.stat-card .value { font-size: 2rem; font-weight: 700; }
.stat-card .label { color: var(--text-muted); font-size: 0.875rem; }

/* === Pills === */
.tech-pills { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.pill {
  border: 1px solid var(--zinc-700);
  border-radius: 999px;
  padding: 0.25rem 0.75rem;
  font-size: 0.8rem;
  color: var(--text-muted);
  background: transparent;
}
.pill.more { border-style: dashed; }

/* === Project showcase === */
.category-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
.category-card {
  background: var(--zinc-900);
  border: 1px solid var(--zinc-800);
  border-radius: var(--radius);
  padding: 2rem;
  text-align: left;
  color: inherit;
  transition: transform 0.25s var(--ease), border-color 0.25s;
}
.category-card:hover { transform: translateY(-4px); }
.category-card.accent-purple:hover { border-color: var(--purple); }
.category-card.accent-amber:hover { border-color: var(--amber); }
.category-card.accent-blue:hover { border-color: var(--blue); }
.category-card .icon { font-size: 2.25rem; }
.category-card h3 { margin: 1rem 0 0.5rem; }
.category-card .count { color: var(--emerald); font-weight: 600; }
.project-list { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
.project-card { background: var(--zinc-900); border: 1px solid var(--zinc-800); border-radius: 12px; padding: 1.25rem; }
.project-card .meta { display: flex; gap: 1rem; color: var(--text-muted); font-size: 0.8rem; margin: 0.75rem 0; }
.status-live { color: var(--emerald); }
.status-beta { color: var(--amber); }

/* === Carousel === */
.carousel-frame { position: relative; outline: none; }
.carousel-frame:focus-visible { box-shadow: 0 0 0 2px var(--emerald-glow); border-radius: var(--radius); }
.carousel-viewport { position: relative; }
.carousel-track { display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 1.5rem; }
.carousel-track > * { animation: card-in 0.45s var(--ease); }
.carousel-frame.dragging .carousel-track { cursor: grabbing; }
.indicator-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 2rem; }
.indicator-dot {
  width: 10px;
  height: 10px;
  border-radius: 999px;
  border: none;
  background: var(--zinc-700);
  padding: 0;
  transition: width 0.3s var(--ease), background 0.3s;
}
.indicator-dot.active { width: 28px; background: var(--emerald); }

/* === Proof cards === */
.proof-card {
  background: var(--zinc-900);
  border: 1px solid var(--zinc-800);
  border-radius: var(--radius);
  overflow: hidden;
  text-align: left;
  color: inherit;
  padding: 0;
}
.proof-card:hover { border-color: var(--emerald); }
.proof-card .cover { aspect-ratio: 16 / 10; width: 100%; object-fit: cover; background: var(--zinc-800); display: block; }
.proof-card .cover.placeholder { display: flex; align-items: center; justify-content: center; color: var(--text-muted); }
.proof-card .body { padding: 1.25rem; }
.proof-card .budget { color: var(--emerald); font-weight: 700; }
.proof-card .badges { display: flex; gap: 0.5rem; margin-top: 0.5rem; }

/* === Testimonials === */
.testimonial-stats { display: flex; gap: 3rem; margin-bottom: 2.5rem; }
.testimonial-stats .value { font-size: 1.75rem; font-weight: 700; color: var(--emerald); }
.testimonial-stats .label { color: var(--text-muted); font-size: 0.85rem; }
.testimonial-card { background: var(--zinc-900); border: 1px solid var(--zinc-800); border-radius: var(--radius); padding: 1.75rem; display: flex; flex-direction: column; gap: 1rem; }
.testimonial-card .review { color: var(--text-muted); font-style: italic; flex: 1; }
.testimonial-card .author { display: flex; align-items: center; gap: 0.75rem; }
.avatar { width: 44px; height: 44px; border-radius: 50%; background: var(--emerald-soft); color: var(--emerald); display: flex; align-items: center; justify-content: center; font-weight: 700; }
.star-rating { display: flex; gap: 0.15rem; }
.star { color: var(--zinc-700); }
.star.filled { color: var(--amber); }

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(6px);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  outline: none;
  animation: fade-in 0.2s ease-out;
}
.modal-content {
  position: relative;
  width: min(960px, 100%);
  max-height: 90vh;
  overflow-y: auto;
  background: var(--zinc-900);
  border: 1px solid var(--zinc-800);
  border-radius: var(--radius);
  padding: 2rem;
}
.modal-content .close-btn { position: absolute; top: 1rem; right: 1rem; }
.gallery { position: relative; border-radius: 12px; overflow: hidden; background: var(--zinc-800); }
.gallery img { width: 100%; max-height: 60vh; object-fit: contain; display: block; }
.gallery .btn-arrow.arrow-left { left: 12px; }
.gallery .btn-arrow.arrow-right { right: 12px; }
.gallery-counter { position: absolute; bottom: 12px; right: 12px; background: rgba(0, 0, 0, 0.7); border-radius: 999px; padding: 0.2rem 0.75rem; font-size: 0.8rem; }
.gallery-thumbs { display: flex; gap: 0.5rem; margin-top: 0.75rem; overflow-x: auto; }
.gallery-thumbs button { border: 2px solid transparent; border-radius: 8px; padding: 0; background: none; opacity: 0.6; }
.gallery-thumbs button.active { border-color: var(--emerald); opacity: 1; }
.gallery-thumbs img { width: 72px; height: 48px; object-fit: cover; border-radius: 6px; display: block; }
.detail-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-top: 1.5rem; }
.detail-grid .label { color: var(--text-muted); font-size: 0.8rem; }

/* === Section status === */
.section-status { text-align: center; color: var(--text-muted); padding: 3rem 0; }
.spinner { display: inline-block; width: 18px; height: 18px; border: 2px solid var(--zinc-700); border-top-color: var(--emerald); border-radius: 50%; animation: spin 0.8s linear infinite; margin-right: 0.75rem; vertical-align: middle; }

/* === Contact and footer === */
.contact-card { background: var(--zinc-900); border: 1px solid var(--zinc-800); border-radius: var(--radius); padding: 3rem; text-align: center; }
.social-links { display: flex; justify-content: center; gap: 1rem; margin-top: 2rem; }
.social-link { display: inline-flex; align-items: center; gap: 0.5rem; border: 1px solid var(--zinc-700); border-radius: 999px; padding: 0.5rem 1.25rem; color: var(--text-muted); }
.social-link:hover { border-color: var(--emerald); color: var(--emerald); }
.site-footer { position: relative; z-index: 1; border-top: 1px solid var(--zinc-800); padding: 2rem 1.5rem; color: var(--text-muted); font-size: 0.875rem; text-align: center; }

/* === Backdrop === */
.backdrop-static {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
  background: radial-gradient(ellipse at 50% 0%, rgba(16, 185, 129, 0.12), transparent 60%);
}
.backdrop-smoke { position: fixed; inset: 0; z-index: 0; pointer-events: none; overflow: hidden; opacity: 0; transition: opacity 1.2s ease-out; }
.backdrop-smoke.visible { opacity: 1; }
.smoke-puff {
  position: absolute;
  border-radius: 50%;
  transform: translate(-50%, -50%);
  background: radial-gradient(circle, rgba(16, 185, 129, 0.10), transparent 70%);
  filter: blur(40px);
  animation-name: drift;
  animation-iteration-count: infinite;
  animation-timing-function: ease-in-out;
  animation-direction: alternate;
}

/* === Greeting intro === */
.greeting-screen {
  position: fixed;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  background: var(--page-black);
  transition: opacity 0.8s ease-out;
}
.greeting-screen.fading { opacity: 0; }
.greeting-text { font-size: clamp(3rem, 10vw, 6rem); font-weight: 800; animation: greet 0.4s var(--ease); }
.greeting-language { color: var(--text-muted); font-family: var(--font-mono); font-size: 0.85rem; letter-spacing: 0.2em; text-transform: uppercase; }
.greeting-welcome { margin-top: 2rem; color: var(--emerald); opacity: 0; transition: opacity 0.6s; }
.greeting-welcome.visible { opacity: 1; }
.greeting-skip { position: fixed; bottom: 2rem; right: 2rem; }

/* === Keyframes === */
@keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.35; } }
@keyframes spin { to { transform: rotate(360deg); } }
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes card-in { from { opacity: 0; transform: translateY(8px); } to { opacity: 1; transform: none; } }
@keyframes greet { from { opacity: 0; transform: translateY(12px); } to { opacity: 1; transform: none; } }
@keyframes drift {
  from { transform: translate(-50%, -50%) scale(1); }
  to { transform: translate(-40%, -60%) scale(1.25); }
}

/* === Responsive === */
@media (max-width: 1024px) {
  .carousel-track { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .category-grid { grid-template-columns: 1fr; }
}
@media (max-width: 768px) {
  .nav-links { display: none; }
  .menu-toggle { display: inline-flex; }
  .stats-grid { grid-template-columns: repeat(2, 1fr); }
  .carousel-track { grid-template-columns: minmax(0, 1fr); }
  .project-list, .detail-grid { grid-template-columns: 1fr; }
  .btn-arrow.arrow-left { left: 4px; }
  .btn-arrow.arrow-right { right: 4px; }
}
@media (prefers-reduced-motion: reduce) {
  html { scroll-behavior: auto; }
  *, *::before, *::after { animation: none !important; transition: none !important; }
}
"#;
