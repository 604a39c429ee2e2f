//! Global CSS for the bento page.
//!
//! Colors, radii and shadows are `--bento-*` variables generated from the
//! page theme. Per-card motion is inline; this sheet only lays things out.

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  min-height: 100%;
  background: var(--bento-page-bg);
  color: var(--bento-text);
  font-family: var(--bento-font);
  -webkit-font-smoothing: antialiased;
}

img {
  display: block;
  max-width: 100%;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Page Layout === */
.bento-page {
  min-height: 100vh;
  padding: 48px 16px;
}

.bento-page__inner {
  margin: 0 auto;
  max-width: var(--bento-max-width, 1200px);
}

/* === Profile Header === */
.bento-header {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  margin-bottom: 48px;
}

.bento-header__avatar {
  width: 112px;
  height: 112px;
  border-radius: 9999px;
  overflow: hidden;
  border: 4px solid #ffffff;
  box-shadow: var(--bento-shadow-raised);
  margin-bottom: 24px;
  cursor: pointer;
}

.bento-header__avatar img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.bento-header__name {
  font-size: 36px;
  font-weight: 700;
  letter-spacing: -0.025em;
  margin-bottom: 8px;
}

.bento-header__tagline {
  color: var(--bento-text-muted);
  font-size: 18px;
  max-width: 28rem;
}

.bento-header__handle {
  color: var(--bento-text-subtle);
  font-size: 14px;
  margin-top: 4px;
}

/* === Grid === */
/* Column tracks, gaps and per-breakpoint card areas are generated from the
   breakpoint table; see `GridSpec::breakpoint_css`. */
.bento-grid {
  display: grid;
  grid-auto-rows: minmax(var(--bento-row-min), auto);
  max-width: var(--bento-max-width);
  margin: 0 auto;
}

/* === Card === */
.bento-card {
  position: relative;
  display: flex;
  flex-direction: column;
  overflow: hidden;
  border-radius: var(--bento-radius);
  padding: var(--bento-padding);
  border: 1px solid rgba(229, 231, 235, 0.5);
  cursor: pointer;
  user-select: none;
  -webkit-user-select: none;
  -webkit-tap-highlight-color: transparent;
  touch-action: manipulation;
}

.bento-card:focus-visible {
  outline: 2px solid var(--bento-text);
  outline-offset: 2px;
}

.bento-card--inert {
  cursor: default;
}

.bento-card--map-pin {
  padding: 0;
}

.bento-card--brand-panel {
  color: #ffffff;
  border: none;
}

/* === Cells (shared) === */
.cell {
  position: relative;
  display: flex;
  flex-direction: column;
  height: 100%;
  width: 100%;
}

.cell__row {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  margin-bottom: 16px;
}

.cell__badge {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  border-radius: 16px;
  color: #ffffff;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.1);
}

.cell__badge--round {
  width: 40px;
  height: 40px;
  border-radius: 9999px;
}

.cell__text {
  margin-top: auto;
}

.cell__text--truncate {
  min-width: 0;
  flex: 1;
  margin-top: 0;
}

.cell__text--truncate .cell__title,
.cell__text--truncate .cell__subtitle {
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.cell__title {
  font-size: 18px;
  font-weight: 700;
  line-height: 1.25;
}

.cell__title--large {
  font-size: 24px;
}

.cell__subtitle {
  font-size: 14px;
  color: var(--bento-text-muted);
  margin-top: 4px;
}

.bento-card--brand-panel .cell__subtitle {
  color: rgba(255, 255, 255, 0.8);
}

.action-pill {
  display: inline-block;
  padding: 6px 16px;
  border-radius: 9999px;
  color: #ffffff;
  font-size: 12px;
  font-weight: 700;
}

.action-pill--block {
  display: block;
  text-align: center;
  margin-top: 16px;
  padding: 8px 16px;
  font-size: 14px;
}

/* === Media Grid === */
.cell__handle {
  font-weight: 700;
  font-size: 18px;
  margin-bottom: 4px;
}

.cell__thumbnails {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 8px;
  margin-top: auto;
}

.cell__thumbnail {
  aspect-ratio: 1 / 1;
  border-radius: 8px;
  overflow: hidden;
  background: #f3f4f6;
}

.cell__thumbnail img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.8;
  transition: opacity 300ms ease;
}

.cell--hovering .cell__thumbnail img {
  opacity: 1;
}

.cell__overlay-arrow {
  position: absolute;
  top: 0;
  right: 0;
  padding: 8px;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.9);
  transition: opacity 200ms ease;
  pointer-events: none;
}

/* === Map Pin === */
.cell--map-pin {
  align-items: center;
  justify-content: center;
}

.cell__map {
  position: absolute;
  inset: 0;
}

.cell__map img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.6;
  filter: grayscale(30%);
}

.cell__map-shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, rgba(255, 255, 255, 0.8), transparent);
}

.cell__pin {
  position: relative;
  z-index: 1;
  display: flex;
  align-items: center;
  justify-content: center;
}

.cell__pin-ping {
  position: absolute;
  width: 100%;
  height: 100%;
  border-radius: 9999px;
  background: #60a5fa;
  opacity: 0.75;
  animation: bento-ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
}

.cell__pin-dot {
  position: relative;
  padding: 12px;
  border-radius: 9999px;
  background: #3b82f6;
  color: #ffffff;
  border: 4px solid #ffffff;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.cell__map-label {
  position: absolute;
  left: 24px;
  bottom: 24px;
  z-index: 1;
  font-weight: 700;
  font-size: 18px;
}

@keyframes bento-ping {
  75%, 100% {
    transform: scale(2);
    opacity: 0;
  }
}

/* === Preview Link === */
.cell--preview-link {
  flex-direction: row;
  align-items: center;
  gap: 16px;
}

.cell__tile {
  display: flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
  width: 64px;
  height: 64px;
  border-radius: 16px;
  background: #f3f4f6;
  border: 1px solid #e5e7eb;
}

.cell__trailing {
  flex-shrink: 0;
  color: var(--bento-text-subtle);
}

/* === Footer === */
.bento-footer {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 8px;
  margin-top: 80px;
  opacity: 0.4;
  transition: opacity 200ms ease;
}

.bento-footer:hover {
  opacity: 1;
}

.bento-footer__mark {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 24px;
  height: 24px;
  border-radius: 6px;
  background: #000000;
}

.bento-footer__dot {
  width: 8px;
  height: 8px;
  border-radius: 9999px;
  background: #ffffff;
}

.bento-footer__name {
  font-weight: 700;
  font-size: 14px;
}
"#;
