//! Page stylesheet, rendered inline by `App`.

pub const LANDING_CSS: &str = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html { scroll-behavior: smooth; }

    body {
        margin: 0;
        padding: 0;
        background-color: #08080f;
        color: #fff;
        font-family: 'Outfit', system-ui, sans-serif;
        -webkit-font-smoothing: antialiased;
    }

    a { color: inherit; text-decoration: none; }
    h1, h2, h3, h4, p { margin: 0; }

    .icon { display: inline-block; flex-shrink: 0; vertical-align: middle; }
    .muted { color: rgba(255, 255, 255, 0.6); }
    .small { font-size: 0.875rem; }

    .gradient-text {
        background: linear-gradient(90deg, #a78bfa, #e879f9, #f472b6);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }

    /* --- KEYFRAMES --- */
    @keyframes float {
        0%, 100% { transform: translate(0, 0) scale(1); }
        33% { transform: translate(30px, -30px) scale(1.05); }
        66% { transform: translate(-20px, 20px) scale(0.95); }
    }
    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes pulse-glow {
        0%, 100% { opacity: 0.4; }
        50% { opacity: 0.8; }
    }
    @keyframes grid-pulse {
        0%, 100% { opacity: 0.03; }
        50% { opacity: 0.08; }
    }

    .animate-fade-in-up { animation: fadeInUp 0.8s ease-out forwards; }
    .animate-fade-in-up-2 { animation: fadeInUp 0.8s ease-out 0.2s forwards; opacity: 0; }
    .animate-fade-in-up-3 { animation: fadeInUp 0.8s ease-out 0.3s forwards; opacity: 0; }
    .blob-float { animation: float 12s ease-in-out infinite; }
    .blob-float-2 { animation: float 15s ease-in-out infinite reverse; }
    .blob-pulse { animation: pulse-glow 6s ease-in-out infinite; }
    .grid-bg { animation: grid-pulse 8s ease-in-out infinite; }

    /* --- SECTION ENTRANCE --- */
    .section { padding: 6rem 1rem; position: relative; }
    .section.clip { overflow: hidden; }
    .section-enter {
        opacity: 0;
        transform: translateY(40px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .section-enter.visible { opacity: 1; transform: translateY(0); }

    .container { max-width: 72rem; margin: 0 auto; }
    .container.narrow { max-width: 56rem; }
    .container.tight { max-width: 42rem; }
    .centered { text-align: center; }

    .section-title { font-size: 2.25rem; font-weight: 700; text-align: center; }
    .section-subtitle { margin: 1rem auto 0; text-align: center; color: rgba(255, 255, 255, 0.6); max-width: 42rem; }

    /* --- NAVBAR --- */
    .navbar {
        position: fixed;
        top: 0; left: 0; right: 0;
        z-index: 50;
        background: transparent;
        transition: all 0.3s;
    }
    .navbar.scrolled {
        background: rgba(8, 8, 15, 0.8);
        backdrop-filter: blur(24px);
        -webkit-backdrop-filter: blur(24px);
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }
    .navbar-inner {
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1rem;
        height: 5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .brand { display: flex; align-items: center; gap: 0.5rem; font-weight: 700; font-size: 1.25rem; }
    .brand-logo {
        width: 2.25rem; height: 2.25rem;
        border-radius: 0.5rem;
        background: linear-gradient(135deg, #8b5cf6, #ec4899);
        display: flex; align-items: center; justify-content: center;
    }
    .nav-links { display: flex; align-items: center; gap: 2rem; }
    .nav-link { color: rgba(255, 255, 255, 0.8); font-size: 0.875rem; font-weight: 500; transition: color 0.2s; }
    .nav-link:hover { color: #fff; }

    .menu-button {
        display: none;
        min-width: 44px; min-height: 44px;
        align-items: center; justify-content: center;
        background: none; border: none; color: #fff;
        border-radius: 0.5rem;
        touch-action: manipulation;
    }
    .menu-button:hover { background: rgba(255, 255, 255, 0.1); }

    .mobile-menu { display: none; max-height: 0; opacity: 0; overflow: hidden; transition: all 0.3s ease-out; }
    .mobile-menu.open { max-height: 20rem; opacity: 1; }
    .mobile-menu-inner {
        padding: 0.5rem 1rem 1.5rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(8, 8, 15, 0.95);
        backdrop-filter: blur(24px);
    }
    .mobile-link { display: block; padding: 0.75rem 0; color: rgba(255, 255, 255, 0.9); font-weight: 500; }
    .mobile-download { margin-top: 1rem; width: 100%; }

    /* --- BUTTONS --- */
    .btn {
        display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem;
        padding: 0.75rem 2rem;
        min-height: 48px;
        border-radius: 0.75rem;
        font-weight: 600;
        transition: transform 0.2s, background 0.2s, box-shadow 0.2s;
    }
    .btn-large { padding: 1rem 2rem; font-size: 1.125rem; font-weight: 700; }
    .btn-primary { background: linear-gradient(90deg, #8b5cf6, #ec4899); color: #fff; }
    .btn-primary:hover, .btn-light:hover { transform: scale(1.05); }
    .btn-outline { border: 1px solid rgba(255, 255, 255, 0.2); color: rgba(255, 255, 255, 0.9); }
    .btn-outline:hover { background: rgba(255, 255, 255, 0.05); border-color: rgba(255, 255, 255, 0.3); }
    .btn-light { background: #fff; color: #7c3aed; font-weight: 700; margin-top: 2rem; }
    .btn-glow:hover { box-shadow: 0 0 30px rgba(168, 85, 247, 0.5), 0 0 60px rgba(236, 72, 153, 0.3); }

    /* --- HERO --- */
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex; align-items: center; justify-content: center;
        overflow: hidden;
        padding-top: 5rem;
    }
    .hero-grid {
        position: absolute; inset: 0;
        background-image:
            linear-gradient(rgba(168, 85, 247, 0.3) 1px, transparent 1px),
            linear-gradient(90deg, rgba(168, 85, 247, 0.3) 1px, transparent 1px);
        background-size: 60px 60px;
    }
    .blob { position: absolute; border-radius: 9999px; filter: blur(64px); }
    .blob-violet { top: 25%; left: 25%; width: 24rem; height: 24rem; background: rgba(139, 92, 246, 0.2); }
    .blob-pink { bottom: 25%; right: 25%; width: 20rem; height: 20rem; background: rgba(236, 72, 153, 0.2); }
    .blob-fuchsia { top: 50%; left: 50%; width: 16rem; height: 16rem; background: rgba(217, 70, 239, 0.1); }
    .hero-content { position: relative; z-index: 10; max-width: 64rem; padding: 0 1rem; text-align: center; }
    .hero-title { font-size: 4rem; font-weight: 800; line-height: 1.1; }
    .hero-subtitle { margin: 1.5rem auto 0; max-width: 42rem; font-size: 1.25rem; color: rgba(255, 255, 255, 0.7); }
    .hero-actions { margin-top: 2.5rem; display: flex; gap: 1rem; justify-content: center; }

    /* --- CARDS --- */
    .card {
        border-radius: 1rem;
        padding: 1.5rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(20, 15, 35, 0.6);
        backdrop-filter: blur(4px);
        transition: all 0.3s;
    }
    .card h3 { margin-top: 1rem; font-size: 1.25rem; font-weight: 600; }
    .card p { margin-top: 0.5rem; }
    .card-hover:hover {
        transform: scale(1.03) translateY(-4px);
        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3), 0 0 0 1px rgba(168, 85, 247, 0.2);
    }
    .icon-badge {
        width: 3rem; height: 3rem;
        border-radius: 0.75rem;
        display: flex; align-items: center; justify-content: center;
        background: linear-gradient(135deg, rgba(139, 92, 246, 0.2), rgba(236, 72, 153, 0.2));
        border: 1px solid rgba(255, 255, 255, 0.1);
        color: #a78bfa;
    }
    .icon-badge.large { width: 4rem; height: 4rem; margin: 0 auto 1.5rem; border-radius: 1rem; }

    .feature-grid {
        margin: 4rem auto 0;
        max-width: 56rem;
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 1.5rem;
    }

    /* --- STATS --- */
    .divider { position: absolute; left: 0; right: 0; height: 1px; }
    .divider-top { top: 0; background: linear-gradient(90deg, transparent, rgba(139, 92, 246, 0.5), transparent); }
    .divider-bottom { bottom: 0; background: linear-gradient(90deg, transparent, rgba(236, 72, 153, 0.5), transparent); }
    .stats-grid { max-width: 64rem; margin: 0 auto; display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
    .stat { text-align: center; }
    .stat-value { font-size: 3rem; font-weight: 700; font-variant-numeric: tabular-nums; }
    .stat-label { margin-top: 0.5rem; color: rgba(255, 255, 255, 0.6); font-weight: 500; }

    /* --- STEPS --- */
    .steps { margin-top: 4rem; display: flex; gap: 1rem; align-items: stretch; }
    .step { flex: 1; display: flex; flex-direction: column; align-items: center; text-align: center; position: relative; }
    .step h3 { margin-top: 1rem; font-size: 1.25rem; font-weight: 600; }
    .step p { margin-top: 0.5rem; }
    .step-number {
        width: 3.5rem; height: 3.5rem;
        border-radius: 1rem;
        background: linear-gradient(135deg, #8b5cf6, #ec4899);
        display: flex; align-items: center; justify-content: center;
        font-weight: 700; font-size: 1.125rem;
        box-shadow: 0 10px 15px rgba(139, 92, 246, 0.3);
        position: relative; z-index: 1;
    }
    .step-connector { position: absolute; top: 1.75rem; width: 50%; height: 2px; z-index: 0; }
    .step-connector.left { left: 0; background: linear-gradient(90deg, transparent, rgba(139, 92, 246, 0.5)); }
    .step-connector.right { left: 50%; background: linear-gradient(90deg, rgba(139, 92, 246, 0.5), transparent); }
    .step-icon {
        margin-top: 1.5rem;
        width: 3rem; height: 3rem;
        border-radius: 0.75rem;
        background: rgba(255, 255, 255, 0.05);
        display: flex; align-items: center; justify-content: center;
        color: #a78bfa;
    }

    /* --- TESTIMONIALS --- */
    .testimonial-strip {
        margin-top: 4rem;
        display: flex; gap: 1.5rem;
        overflow-x: auto;
        padding-bottom: 1rem;
        scroll-snap-type: x mandatory;
        scrollbar-width: none;
    }
    .testimonial-strip::-webkit-scrollbar { display: none; }
    .testimonial { flex-shrink: 0; width: 360px; scroll-snap-align: center; }
    .stars { display: flex; gap: 0.25rem; margin-bottom: 1rem; color: #fbbf24; }
    .quote { font-style: italic; color: rgba(255, 255, 255, 0.9); }
    .author { margin-top: 1.5rem; display: flex; align-items: center; gap: 0.75rem; }
    .avatar {
        width: 3rem; height: 3rem;
        border-radius: 9999px;
        display: flex; align-items: center; justify-content: center;
        font-weight: 700; font-size: 0.875rem;
    }
    .author-name { font-weight: 600; }

    /* --- DOWNLOAD --- */
    .download-blurb { margin-top: 1rem; color: rgba(255, 255, 255, 0.7); line-height: 1.6; }
    .download-actions { margin-top: 2.5rem; display: flex; gap: 1rem; justify-content: center; align-items: center; }

    /* --- FAQ --- */
    .faq-grid { margin-top: 4rem; display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; align-items: start; }
    .accordion-item {
        border-radius: 0.75rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(20, 15, 35, 0.5);
        overflow: hidden;
        display: flex; flex-direction: column;
    }
    .accordion-toggle {
        width: 100%;
        min-height: 56px;
        display: flex; align-items: center; justify-content: space-between; gap: 1rem;
        padding: 1rem 1.25rem;
        text-align: left;
        color: #fff; font: inherit; font-weight: 500;
        background: none; border: none; cursor: pointer;
        transition: background 0.2s;
    }
    .accordion-toggle:hover { background: rgba(255, 255, 255, 0.05); }
    .chevron { color: rgba(255, 255, 255, 0.6); transition: transform 0.3s; }
    .chevron-open { transform: rotate(180deg); }
    .accordion-content { max-height: 0; overflow: hidden; transition: max-height 0.4s ease; }
    .accordion-content.open { max-height: 500px; }
    .accordion-content p { padding: 0 1.25rem 1rem; color: rgba(255, 255, 255, 0.6); font-size: 0.875rem; }

    /* --- CTA --- */
    .cta-banner { position: relative; border-radius: 1.5rem; overflow: hidden; }
    .cta-gradient { position: absolute; inset: 0; background: linear-gradient(90deg, #7c3aed, #c026d3, #db2777); }
    .cta-pattern {
        position: absolute; inset: 0; opacity: 0.5;
        background-image: radial-gradient(rgba(255, 255, 255, 0.08) 2px, transparent 2px);
        background-size: 30px 30px;
    }
    .cta-body { position: relative; z-index: 10; padding: 4rem 3rem; text-align: center; }
    .cta-body p { margin: 1rem auto 0; max-width: 36rem; color: rgba(255, 255, 255, 0.9); }

    /* --- FOOTER --- */
    .footer { padding: 4rem 1rem; border-top: 1px solid rgba(255, 255, 255, 0.1); }
    .footer-top { display: flex; justify-content: space-between; align-items: flex-start; gap: 3rem; }
    .footer-brand { max-width: 20rem; }
    .footer-brand p { margin-top: 1rem; }
    .socials { margin-top: 1.5rem; display: flex; gap: 1rem; }
    .socials a { color: rgba(255, 255, 255, 0.5); transition: color 0.2s; }
    .socials a:hover { color: #fff; }
    .footer-columns { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
    .footer-columns h4 { font-weight: 600; margin-bottom: 1rem; }
    .footer-columns ul { list-style: none; margin: 0; padding: 0; display: grid; gap: 0.75rem; }
    .footer-columns a { color: rgba(255, 255, 255, 0.6); font-size: 0.875rem; }
    .footer-columns a:hover { color: #fff; }
    .footer-bottom {
        margin-top: 3rem; padding-top: 2rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        text-align: center; color: rgba(255, 255, 255, 0.5); font-size: 0.875rem;
    }

    /* --- Mobile Styles --- */
    @media (max-width: 768px) {
        .nav-links { display: none; }
        .menu-button { display: flex; }
        .mobile-menu { display: block; }
        .navbar-inner { height: 4rem; }
        .hero-title { font-size: 2.5rem; }
        .hero-actions, .download-actions { flex-direction: column; }
        .download-actions .btn { width: 100%; }
        .feature-grid, .faq-grid { grid-template-columns: 1fr; }
        .stats-grid { grid-template-columns: repeat(2, 1fr); }
        .steps { flex-direction: column; gap: 2rem; }
        .step-connector { display: none; }
        .testimonial { width: 320px; }
        .footer-top { flex-direction: column; }
        .footer-columns { grid-template-columns: repeat(2, 1fr); }
        .cta-body { padding: 4rem 1.5rem; }
    }
"#;
